use crate::error::LoggerError;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;

const DEFAULT_MAX_FILES: usize = 10;

/// Logging section of a host configuration.
///
/// Every field has a default, so an empty table yields console logging at
/// `info`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Minimum level: `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
    /// Extra directives such as `foundry_registry=trace`. `RUST_LOG` wins when
    /// no directives are given here.
    pub filter: Option<String>,
    pub console: bool,
    pub file: Option<FileSink>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, console: true, file: None }
    }
}

impl LogSettings {
    #[must_use]
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level.to_string().to_lowercase();
        self
    }

    #[must_use]
    pub fn with_file(mut self, file: FileSink) -> Self {
        self.file = Some(file);
        self
    }

    pub(crate) fn level_filter(&self) -> Result<LevelFilter, LoggerError> {
        LevelFilter::from_str(&self.level).map_err(|_| LoggerError::InvalidSettings {
            message: format!("unknown level `{}`", self.level).into(),
            context: None,
        })
    }

    pub(crate) fn validate(&self) -> Result<(), LoggerError> {
        self.level_filter()?;
        if !self.console && self.file.is_none() {
            return Err(LoggerError::InvalidSettings {
                message: "no sink enabled, enable the console or a log file".into(),
                context: None,
            });
        }
        if self.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(LoggerError::InvalidSettings {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }
        Ok(())
    }
}

/// Rolling log file written by a background worker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileSink {
    pub directory: PathBuf,
    #[serde(default)]
    pub rotation: LogRotation,
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    #[serde(default)]
    pub format: LogFormat,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            rotation: LogRotation::default(),
            max_files: DEFAULT_MAX_FILES,
            format: LogFormat::default(),
        }
    }

    #[must_use]
    pub const fn json(mut self) -> Self {
        self.format = LogFormat::Json;
        self
    }
}

const fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => Self::MINUTELY,
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}
