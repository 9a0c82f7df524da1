use std::num::NonZero;

use serde::{Deserialize, Deserializer};

/// Configuration for the async runtime.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct RuntimeConfig
{
	/// The amount of worker threads to spin up.
	///
	/// Defaults to the amount of available CPUs.
	#[serde(deserialize_with = "deserialize_option_usize")]
	pub worker_threads: Option<NonZero<usize>>,
}

fn deserialize_option_usize<'de, D>(deserializer: D) -> Result<Option<NonZero<usize>>, D::Error>
where
	D: Deserializer<'de>,
{
	<Option<usize> as Deserialize<'de>>::deserialize(deserializer)
		.map(|maybe_num| maybe_num.and_then(NonZero::new))
}
