use crate::domains::logger::{DomainLogger, FileLogger};
use std::str::FromStr;
use std::sync::Arc;

/// Initialize the fast_log file appender and return the logger the service can inject.
/// `level` takes the usual names (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub fn init_file_logger(path: &str, level: &str) -> Result<Arc<dyn DomainLogger>, String> {
    let level = log::LevelFilter::from_str(level)
        .map_err(|e| format!("Invalid log level '{}': {}", level, e))?;
    FileLogger::init(path, level).map_err(|e| format!("Failed to initialize fast_log: {}", e))?;
    Ok(Arc::new(FileLogger))
}
