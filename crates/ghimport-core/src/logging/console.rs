//! Console logger implementation

use crate::env::EnvSource;

use super::traits::{Logger, LogLevel};

/// Environment variable holding the minimum console log level
pub const LOG_LEVEL_VAR: &str = "GHIMPORT_LOG_LEVEL";

/// A logger that writes to stderr, dropping records below `min_level`
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger with the default prefix, logging `Info` and above
    pub fn new() -> Self {
        Self {
            prefix: "[ghimport]".to_string(),
            min_level: LogLevel::Info,
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::new()
        }
    }

    /// Set the minimum level
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Build a console logger whose level comes from `GHIMPORT_LOG_LEVEL`
    ///
    /// Unknown or missing values keep the default `Info` level.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        let min_level = env
            .get(LOG_LEVEL_VAR)
            .and_then(|v| v.parse().ok())
            .unwrap_or(LogLevel::Info);
        Self::new().with_min_level(min_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn format(&self, level: LogLevel, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        eprintln!("{}", self.format(level, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnvSource;

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[ghimport]");
        assert_eq!(logger.min_level(), LogLevel::Info);

        let custom = ConsoleLogger::with_prefix("[github]").with_min_level(LogLevel::Debug);
        assert_eq!(custom.prefix, "[github]");
        assert_eq!(custom.min_level(), LogLevel::Debug);
    }

    #[test]
    fn test_console_logger_format() {
        let logger = ConsoleLogger::new();
        assert_eq!(
            logger.format(LogLevel::Warn, "unsupported service"),
            "[ghimport] WARN: unsupported service"
        );
    }

    #[test]
    fn test_console_logger_from_env() {
        let env = MemoryEnvSource::new();
        env.set(LOG_LEVEL_VAR, "error");
        assert_eq!(ConsoleLogger::from_env(&env).min_level(), LogLevel::Error);

        env.set(LOG_LEVEL_VAR, "nonsense");
        assert_eq!(ConsoleLogger::from_env(&env).min_level(), LogLevel::Info);
    }
}
