use crate::config::LoggingConfig;
use crate::domains::logger::DynLogger;
use tracing_subscriber::EnvFilter;

/// Process-wide logging setup: domain logger first, then the tracing subscriber on stderr.
/// The fast_log file appender has to claim the global `log` logger, so it is installed
/// before tracing and tracing is built without its `log` bridge.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<DynLogger> {
    let logger = super::init_combined_logger(config.file.as_deref(), &config.level);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(logger)
}
