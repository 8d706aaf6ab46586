use std::path::PathBuf;

use thiserror::Error;
use time::macros::format_description;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::UtcTime;

const APP_DIR: &str = "pynote";
const LOG_FILE_NAME: &str = "pynote.log";
/// Editor events at `info`; dependencies only when they warn.
const DEFAULT_FILTER: &str = "pynote=info,warn";

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("create log directory failed: {}", path.display())]
	CreateLogDir {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("initialize tracing subscriber failed")]
	InitSubscriber {
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

/// Sends `tracing` output to a file, since the terminal belongs to the editor UI.
/// Returns the path of the log file.
pub fn init_logging() -> Result<PathBuf, LoggingError> {
	let log_dir = user_log_dir();
	std::fs::create_dir_all(&log_dir)
		.map_err(|source| LoggingError::CreateLogDir { path: log_dir.clone(), source })?;

	let timer =
		UtcTime::new(format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"));
	let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
	let (filter, rejected) = match env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()) {
		Ok(filter) => (filter, None),
		Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
	};
	tracing_subscriber::fmt()
		.with_timer(timer)
		.with_env_filter(filter)
		.with_writer(file_appender)
		.with_ansi(false)
		.try_init()
		.map_err(|source| LoggingError::InitSubscriber { source })?;

	if let Some(err) = rejected {
		warn!("ignoring invalid {} directives, using {:?}: {}", EnvFilter::DEFAULT_ENV, DEFAULT_FILTER, err);
	}
	Ok(log_dir.join(LOG_FILE_NAME))
}

/// Filter from `RUST_LOG` directives; unset or blank means [`DEFAULT_FILTER`].
fn env_filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
	match directives.map(str::trim) {
		Some(directives) if !directives.is_empty() => EnvFilter::try_new(directives),
		_ => Ok(EnvFilter::new(DEFAULT_FILTER)),
	}
}

pub fn user_log_dir() -> PathBuf {
	#[cfg(target_os = "windows")]
	{
		std::env::var_os("LOCALAPPDATA")
			.map(PathBuf::from)
			.unwrap_or_else(std::env::temp_dir)
			.join(APP_DIR)
			.join("logs")
	}

	#[cfg(target_os = "macos")]
	{
		std::env::var_os("HOME")
			.map(PathBuf::from)
			.unwrap_or_else(std::env::temp_dir)
			.join("Library")
			.join("Logs")
			.join(APP_DIR)
	}

	#[cfg(all(unix, not(target_os = "macos")))]
	{
		let state_home = std::env::var_os("XDG_STATE_HOME").map(PathBuf::from).unwrap_or_else(|| {
			std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(std::env::temp_dir).join(".local").join("state")
		});
		state_home.join(APP_DIR).join("logs")
	}
}
