use crate::domains::logger::DomainLogger;
use log::{Level, LevelFilter};
use std::str::FromStr;
use std::sync::Arc;

/// stderr logger; stdout carries the telemetry records.
pub struct ConsoleLogger {
    max_level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.max_level
    }

    fn emit(&self, level: Level, msg: &str) {
        if !self.enabled(level) {
            return;
        }
        match level {
            Level::Error => eprintln!("ERROR: {}", msg),
            Level::Warn => eprintln!("WARN: {}", msg),
            _ => eprintln!("{}", msg),
        }
    }
}

impl DomainLogger for ConsoleLogger {
    fn info(&self, msg: &str) {
        self.emit(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.emit(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.emit(Level::Error, msg);
    }
}

/// Console logger honoring a level name; unknown names fall back to `info`.
pub fn init_console_logger(level: &str) -> Arc<dyn DomainLogger> {
    let max_level = LevelFilter::from_str(level).unwrap_or(LevelFilter::Info);
    Arc::new(ConsoleLogger::new(max_level))
}

/// Silent logger for tests that do not inspect log output.
pub fn init_noop_logger() -> Arc<dyn DomainLogger> {
    Arc::new(ConsoleLogger::new(LevelFilter::Off))
}
