use std::cell::RefCell;
use std::str::FromStr;

use anyhow::Result;
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};

use crate::constants::{ENV_LOG_LEVEL, LOG_LEVEL_DEFAULT};

/// Target attached to every record the job emits through [`LogFacade`]
pub const JOB_LOG_TARGET: &str = "chunked_transform";

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug, info, warning, and error messages
    Debug,
    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" | "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!("Unknown verbosity level: {s}")),
        }
    }
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Resolve the verbosity from an optional `LOG_LEVEL` value
    ///
    /// An unset variable falls back to `INFO`; a set but unknown value is an error.
    pub fn from_env_value(value: Option<&str>) -> std::result::Result<Self, String> {
        LogLevel::from_str(value.unwrap_or(LOG_LEVEL_DEFAULT))
    }

    /// Read the verbosity from the `LOG_LEVEL` environment variable
    pub fn from_environment() -> std::result::Result<Self, String> {
        let value = std::env::var(ENV_LOG_LEVEL).ok();
        LogLevel::from_env_value(value.as_deref())
    }
}

/// Initialise the logger with the specified verbosity level
///
/// Records are written to stderr.
pub fn init_logger(verbosity: LogLevel) -> Result<()> {
    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                colors_line.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(verbosity.to_level_filter())
        .chain(std::io::stderr())
        .apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}

/// Initialise the logger from the `LOG_LEVEL` environment variable
pub fn init_default_logger() -> Result<()> {
    let verbosity = LogLevel::from_environment().map_err(anyhow::Error::msg)?;
    init_logger(verbosity)
}

/// Logging capability handed to the job
///
/// The job never talks to the global logger directly, which lets callers
/// capture its records without installing a process-wide logger.
pub trait JobLogger {
    /// Emit one record at the given level
    fn log(&self, level: Level, message: &str);

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }
}

impl<T: JobLogger + ?Sized> JobLogger for &T {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message);
    }
}

/// Forwards job records to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl JobLogger for LogFacade {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: JOB_LOG_TARGET, level, "{message}");
    }
}

/// Keeps every record in memory, in emission order
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RefCell<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records emitted so far
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    /// Messages emitted at exactly `level`
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(record_level, _)| *record_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl JobLogger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        // Test valid log levels
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("critical").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);

        // Test case insensitivity
        assert_eq!(LogLevel::from_str("ERROR").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("Warning").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);

        // Test invalid log level
        let result = LogLevel::from_str("invalid");
        assert_eq!(
            result.unwrap_err(),
            "Unknown verbosity level: invalid",
            "Error message should indicate the unknown level"
        );
    }

    #[test]
    fn test_log_level_to_level_filter() {
        assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
        assert_eq!(LogLevel::Warning.to_level_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
        assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
        assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_log_level_from_env_value() {
        assert_eq!(LogLevel::from_env_value(None).unwrap(), LogLevel::Info);
        assert_eq!(
            LogLevel::from_env_value(Some("DEBUG")).unwrap(),
            LogLevel::Debug
        );
        assert!(LogLevel::from_env_value(Some("loud")).is_err());
    }

    #[test]
    fn test_memory_logger_keeps_order() {
        let logger = MemoryLogger::new();
        logger.info("first");
        logger.debug("second");
        logger.warn("third");

        assert_eq!(
            logger.records(),
            vec![
                (Level::Info, "first".to_string()),
                (Level::Debug, "second".to_string()),
                (Level::Warn, "third".to_string()),
            ]
        );
        assert_eq!(logger.messages_at(Level::Debug), vec!["second".to_string()]);
    }

    #[test]
    fn test_logger_reference_forwards() {
        fn emit(logger: impl JobLogger) {
            logger.info("through a reference");
        }

        let logger = MemoryLogger::new();
        emit(&logger);
        assert_eq!(
            logger.messages_at(Level::Info),
            vec!["through a reference".to_string()]
        );
    }
}
