//! Logging utilities for the application
//!
//! Logs go through `tracing`; records emitted with the `log` macros are
//! bridged by `tracing_subscriber`. The filter comes from `RUST_LOG` when set,
//! then from `LOG_LEVEL`, and defaults to `info`.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::utils::constants::LOG_LEVEL_ENV;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the log filter from the environment
pub fn log_filter() -> EnvFilter {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}
	let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
	EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Setup logging with a custom writer
///
/// Fails if a global subscriber is already installed.
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(log_filter())
		.with(
			fmt::layer().with_writer(writer).event_format(
				fmt::format()
					.with_level(true)
					.with_target(true)
					.with_thread_ids(false)
					.with_thread_names(false)
					.with_ansi(false)
					.compact(),
			),
		)
		.try_init()?;
	Ok(())
}
