//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for Foundry hosts.
//!
//! * A compact, colored console layer.
//! * An optional rolling log file fed by a non-blocking worker, as plain text
//!   or JSON lines.
//! * An `EnvFilter` seeded from [`LogSettings::level`] and
//!   [`LogSettings::filter`]; without explicit directives `RUST_LOG` applies.
//!
//! Settings deserialize from the host's configuration file, so logging is
//! configured next to the objects it observes.
//!
//! ## Example
//!
//! ```rust
//! use foundry_logger::{LevelFilter, LogSettings};
//!
//! let settings = LogSettings::default().with_level(LevelFilter::DEBUG);
//! let _guard = foundry_logger::init("my-app", &settings).unwrap();
//! tracing::debug!("ready");
//! ```

mod error;
mod settings;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::settings::{FileSink, LogFormat, LogRotation, LogSettings};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

/// Keeps the file worker alive; dropping it flushes and stops file logging.
#[must_use = "Dropping this guard stops the background log writer."]
#[derive(Debug)]
pub struct LogGuard {
    worker: Option<WorkerGuard>,
}

impl LogGuard {
    /// Returns `true` when a log file is being written.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.worker.is_some()
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        if self.worker.is_some() {
            tracing::debug!("Flushing log file before shutdown");
        }
    }
}

/// Installs the global subscriber described by `settings`.
///
/// `name` prefixes rolling log files, e.g. `foundry.2026-01-31.log`.
///
/// # Errors
/// Returns [`LoggerError::InvalidSettings`] for an empty name, an unknown
/// level, bad filter directives or when no sink is enabled,
/// [`LoggerError::Io`] / [`LoggerError::Appender`] when the log file cannot
/// be opened and [`LoggerError::Subscriber`] when a global subscriber already
/// exists.
pub fn init(name: &str, settings: &LogSettings) -> Result<LogGuard, LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidSettings {
            message: "logger name cannot be empty".into(),
            context: None,
        });
    }
    settings.validate()?;
    let filter = env_filter(settings)?;

    let mut layers = Vec::new();
    if settings.console {
        layers.push(layer().compact().with_ansi(true).boxed());
    }

    let worker = if let Some(file) = &settings.file {
        fs::create_dir_all(&file.directory)
            .context(format!("Creating {}", file.directory.display()))?;

        let appender = RollingFileAppender::builder()
            .rotation(file.rotation.into())
            .filename_prefix(name)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(file.max_files)
            .build(&file.directory)?;
        let (writer, worker) = tracing_appender::non_blocking(appender);

        let file_layer = layer().with_writer(writer).with_ansi(false);
        layers.push(match file.format {
            LogFormat::Plain => file_layer.boxed(),
            LogFormat::Json => file_layer.json().boxed(),
        });
        Some(worker)
    } else {
        None
    };

    tracing_subscriber::registry().with(filter).with(layers).try_init()?;
    tracing::debug!(name, level = %settings.level, "Logger initialized");

    Ok(LogGuard { worker })
}

fn env_filter(settings: &LogSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level_filter()?.into());
    let Some(directives) = &settings.filter else {
        return Ok(builder.from_env_lossy());
    };
    builder.parse(directives).map_err(|e| LoggerError::InvalidSettings {
        message: format!("invalid filter `{directives}`: {e}").into(),
        context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_filter_is_parsed() {
        let settings = LogSettings {
            filter: Some("foundry_registry=trace".to_owned()),
            ..LogSettings::default()
        };
        assert!(env_filter(&settings).is_ok());
    }

    #[test]
    fn test_bad_filter_is_rejected() {
        let settings =
            LogSettings { filter: Some("foundry=loud".to_owned()), ..LogSettings::default() };
        assert!(matches!(env_filter(&settings), Err(LoggerError::InvalidSettings { .. })));
    }

    #[test]
    #[serial]
    fn test_empty_name_is_rejected_before_install() {
        let err = init("  ", &LogSettings::default()).expect_err("empty name");
        assert!(matches!(err, LoggerError::InvalidSettings { .. }));
    }

    #[test]
    #[serial]
    fn test_init_creates_log_directory() -> Result<(), LoggerError> {
        let tmp_dir = tempdir().context("Creating temp dir")?;
        let log_dir = tmp_dir.path().join("nested").join("logs");

        let guard = init("unit-test", &LogSettings::default().with_file(FileSink::new(&log_dir)))?;
        tracing::info!("hello world");

        assert!(guard.has_file_sink());
        assert!(log_dir.is_dir(), "log directory should be created by init");
        Ok(())
    }
}
