use elk_collar_sim::Config;
use tracing::{error, info};
use std::error::Error;
use std::sync::Arc;

use elk_collar_sim::adapters::outbound::{init_logging, StdoutSink, TokioPacer};
use elk_collar_sim::application::TransmissionService;
use elk_collar_sim::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use elk_collar_sim::domains::telemetry::CollarDataGenerator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration (file is optional, COLLAR_* env vars override it)
    let config_path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?;

    // Logging goes to stderr (and the optional file); stdout is reserved for telemetry records
    let logger = init_logging(&config.logging)?;

    info!("Starting elk collar simulation");
    info!("Configuration loaded from {} (defaults where absent)", config_path);
    info!(
        "Simulating {} elk, interval {} ms, {} fix(es) per elk",
        config.simulation.num_elks, config.simulation.interval_ms, config.collar.fixes_per_elk
    );

    let generator = CollarDataGenerator::new(config.collar_settings()?)?;
    let service = TransmissionService::new(
        Arc::new(generator),
        Arc::new(StdoutSink::stdout(config.output.prefix.clone())),
        Arc::new(TokioPacer),
        logger,
        config.interval(),
    );

    match service.run(config.simulation.num_elks).await {
        Ok(report) => {
            info!("Batch {} finished, {} data points sent", report.batch_id, report.emitted);
            Ok(())
        }
        Err(e) => {
            error!("Simulation aborted: {}", e);
            Err(e.into())
        }
    }
}
