//! In-memory logger

use std::sync::RwLock;

use super::traits::{Logger, LogLevel};

/// A single captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that keeps every record in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RwLock<Vec<LogRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records logged so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.read().unwrap().clone()
    }

    /// Whether any record at `level` contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.records
            .read()
            .unwrap()
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }

    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.records.write().unwrap().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures() {
        let logger = MemoryLogger::new();
        logger.info("bound service members");
        logger.warn("teams not supported");

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, LogLevel::Info);
        assert!(logger.contains(LogLevel::Warn, "teams"));
        assert!(!logger.contains(LogLevel::Error, "teams"));

        logger.clear();
        assert!(logger.records().is_empty());
    }
}
