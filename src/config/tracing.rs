//! Configuration for [`crate::logging`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Configuration for logging.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TracingConfig
{
	/// Whether to emit logs at all.
	pub enable: bool,

	/// Default filter directives, used if `RUST_LOG` is not set.
	pub filter: Box<str>,

	/// Logging to stderr.
	pub stderr: StderrConfig,

	/// Logging to files.
	pub files: FilesConfig,
}

/// Configuration for logging to stderr.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct StderrConfig
{
	/// Whether to log to stderr.
	pub enable: bool,

	/// Whether to emit ANSI escape codes.
	pub ansi: bool,
}

/// Configuration for logging to files.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilesConfig
{
	/// Whether to log to files.
	pub enable: bool,

	/// The directory to put the log files in.
	///
	/// A new file is started every day.
	pub directory: Box<Path>,
}

impl TracingConfig
{
	/// Returns the filter to apply to every layer.
	///
	/// `RUST_LOG` takes precedence over [`TracingConfig::filter`].
	pub fn env_filter(&self) -> EnvFilter
	{
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&*self.filter))
	}
}

impl Default for TracingConfig
{
	fn default() -> Self
	{
		Self {
			enable: true,
			filter: Box::from("series_api=info,tower_http=info,warn"),
			stderr: StderrConfig::default(),
			files: FilesConfig::default(),
		}
	}
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self { enable: true, ansi: true }
	}
}

impl Default for FilesConfig
{
	fn default() -> Self
	{
		Self { enable: false, directory: PathBuf::from("./logs").into_boxed_path() }
	}
}
