use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Fans every message out to each attached logger, in attach order.
#[derive(Default)]
pub struct MultiLogger {
    targets: Vec<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(targets: Vec<Arc<dyn DomainLogger>>) -> Self {
        Self { targets }
    }

    pub fn attach(mut self, target: Arc<dyn DomainLogger>) -> Self {
        self.targets.push(target);
        self
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.targets.iter().for_each(|t| t.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.targets.iter().for_each(|t| t.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.targets.iter().for_each(|t| t.error(msg));
    }
}

/// Console logger plus, when `file` is set and fast_log initializes, a file logger.
pub fn init_combined_logger(file: Option<&str>, level: &str) -> Arc<dyn DomainLogger> {
    let console = super::init_console_logger(level);
    let Some(path) = file else {
        return console;
    };
    match super::init_file_logger(path, level) {
        Ok(file_logger) => Arc::new(MultiLogger::new(vec![file_logger, console])),
        Err(e) => {
            console.warn(&format!("file logging disabled: {}", e));
            console
        }
    }
}
