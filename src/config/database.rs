use std::num::NonZero;

use serde::{Deserialize, Deserializer};
use url::Url;

/// Configuration for the database connection pool.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DatabaseConfig
{
	/// Where the database lives.
	///
	/// The file is created if it doesn't exist yet.
	#[serde(default = "default_url")]
	pub url: Url,

	/// The amount of connections to open (and keep around) immediately.
	pub min_connections: u32,

	/// The maximum amount of connections the pool will open.
	///
	/// If this is [`None`], the amount of available CPUs is used instead.
	#[serde(deserialize_with = "deserialize_option_u32")]
	pub max_connections: Option<NonZero<u32>>,
}

impl Default for DatabaseConfig
{
	fn default() -> Self
	{
		Self { url: default_url(), min_connections: 1, max_connections: None }
	}
}

fn default_url() -> Url
{
	Url::parse("sqlite://series.db").expect("hard-coded url should be valid")
}

fn deserialize_option_u32<'de, D>(deserializer: D) -> Result<Option<NonZero<u32>>, D::Error>
where
	D: Deserializer<'de>,
{
	<Option<u32> as Deserialize<'de>>::deserialize(deserializer)
		.map(|maybe_num| maybe_num.and_then(NonZero::new))
}
