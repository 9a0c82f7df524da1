//! Runtime configuration.
//!
//! The configuration is loaded from a TOML file on startup. Every section has sensible defaults,
//! so an empty (or missing) file is a valid configuration.

use serde::Deserialize;

mod database;
pub use database::DatabaseConfig;

mod http;
pub use http::HttpConfig;

mod runtime;
pub use runtime::RuntimeConfig;

pub mod tracing;
pub use tracing::TracingConfig;

/// The global configuration for the API.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	/// Configuration for the async runtime.
	pub runtime: RuntimeConfig,

	/// Configuration for the HTTP server.
	pub http: HttpConfig,

	/// Configuration for the database connection pool.
	pub database: DatabaseConfig,

	/// Configuration for logging.
	pub tracing: TracingConfig,
}

impl Config
{
	/// Parses a configuration from the contents of a TOML file.
	pub fn from_toml(text: &str) -> Result<Self, toml::de::Error>
	{
		toml::from_str(text)
	}
}
