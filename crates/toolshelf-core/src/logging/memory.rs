//! Recording logger

use parking_lot::Mutex;

use super::traits::Logger;

/// Severity of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A logger that keeps every entry in memory
///
/// Lets callers (and tests) inspect which degradations were reported,
/// e.g. unknown icons or resolver fallbacks.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in arrival order
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().clone()
    }

    /// Messages recorded at exactly `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warn)
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::logging::SharedLogger;

    #[test]
    fn test_records_by_level() {
        let logger = Arc::new(MemoryLogger::new());
        let shared: SharedLogger = logger.clone();

        crate::log_warn!(shared, "unknown icon '{}'", "Sparkles");
        shared.info("loaded");
        shared.debug("details");

        assert_eq!(logger.warnings(), vec!["unknown icon 'Sparkles'".to_string()]);
        assert_eq!(logger.entries().len(), 3);
        assert!(LogLevel::Error > LogLevel::Warn);

        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
