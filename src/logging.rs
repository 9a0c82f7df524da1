//! Logging setup.
//!
//! Logs are emitted through [`tracing`]. Depending on [the configuration][config], they are
//! written to stderr, to daily rotated files, or both.
//!
//! [config]: crate::config::TracingConfig

use std::backtrace::Backtrace;
use std::{fs, io, panic};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::TracingConfig;
use crate::config::tracing::{FilesConfig, StderrConfig};

/// Initializes the global subscriber.
///
/// If file logging is enabled, the returned [`WorkerGuard`] must be kept alive until the
/// program exits, otherwise buffered logs may be lost.
pub fn init(config: &TracingConfig) -> io::Result<Option<WorkerGuard>>
{
	if !config.enable {
		return Ok(None);
	}

	let stderr = stderr_layer(&config.stderr);
	let (files, guard) = files_layer(&config.files)?.unzip();
	let layer = Layer::and_then(stderr, files).with_filter(config.env_filter());

	tracing_subscriber::registry()
		.with(layer)
		.try_init()
		.map_err(io::Error::other)?;

	info!("initialized tracing");

	Ok(guard)
}

/// Installs a global panic hook that logs panics before invoking the previous hook.
pub fn install_panic_hook()
{
	let old_hook = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		error_span!(target: "series_api::runtime", "panic_hook").in_scope(|| {
			let backtrace = Backtrace::force_capture();

			error!(target: "series_api::runtime", "\n{info}\n---\nbacktrace:\n{backtrace}");
		});

		old_hook(info)
	}));
}

fn stderr_layer<S>(config: &StderrConfig) -> Option<impl Layer<S>>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	if !config.enable {
		return None;
	}

	let layer = tracing_subscriber::fmt::layer()
		.pretty()
		.with_ansi(config.ansi)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
		.with_target(true)
		.with_thread_names(true)
		.with_writer(io::stderr);

	Some(layer)
}

fn files_layer<S>(config: &FilesConfig) -> io::Result<Option<(impl Layer<S>, WorkerGuard)>>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	if !config.enable {
		return Ok(None);
	}

	fs::create_dir_all(&config.directory)?;

	let log_dir = config.directory.canonicalize()?;
	let (writer, guard) = tracing_appender::rolling::Builder::new()
		.rotation(Rotation::DAILY)
		.filename_prefix("series-api")
		.filename_suffix("log")
		.build(&log_dir)
		.map(tracing_appender::non_blocking)
		.map_err(io::Error::other)?;

	let layer = tracing_subscriber::fmt::layer()
		.json()
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::CLOSE)
		.with_target(true)
		.with_writer(writer);

	Ok(Some((layer, guard)))
}
