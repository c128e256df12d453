// Transmission Service - generate one batch, emit every record, pause in between
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::common::ApplicationResult;
use crate::domains::logger::DynLogger;
use crate::domains::telemetry::{BulkDataGenerator, Pacer, TelemetrySink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmissionReport {
    pub batch_id: Uuid,
    pub emitted: usize,
}

pub struct TransmissionService {
    generator: Arc<dyn BulkDataGenerator>,
    sink: Arc<dyn TelemetrySink>,
    pacer: Arc<dyn Pacer>,
    logger: DynLogger,
    interval: Duration,
}

impl TransmissionService {
    pub fn new(
        generator: Arc<dyn BulkDataGenerator>,
        sink: Arc<dyn TelemetrySink>,
        pacer: Arc<dyn Pacer>,
        logger: DynLogger,
        interval: Duration,
    ) -> Self {
        Self { generator, sink, pacer, logger, interval }
    }

    /// Generate the bulk data for `count` animals and send it record by record.
    /// A generator failure emits nothing; a sink failure stops at the failing record.
    pub async fn run(&self, count: usize) -> ApplicationResult<TransmissionReport> {
        let batch_id = Uuid::new_v4();
        let bulk_data = match self.generator.generate_bulk_data(count) {
            Ok(data) => data,
            Err(e) => {
                self.logger.error(&format!("batch {}: bulk data generation failed: {}", batch_id, e));
                return Err(e.into());
            }
        };
        self.logger.info(&format!(
            "batch {}: generated {} data points for {} elk",
            batch_id,
            bulk_data.len(),
            count
        ));

        let total = bulk_data.len();
        let mut emitted = 0;
        for (i, data_point) in bulk_data.iter().enumerate() {
            if let Err(e) = self.sink.send(data_point).await {
                self.logger.error(&format!(
                    "batch {}: sending data point {} of {} failed: {}",
                    batch_id,
                    i + 1,
                    total,
                    e
                ));
                return Err(e);
            }
            emitted += 1;
            self.logger.info(&format!("Sending to AWS: {}", data_point));
            if i + 1 < total {
                self.pacer.pause(self.interval).await;
            }
        }

        self.logger.info(&format!("batch {}: sent {} data points", batch_id, emitted));
        Ok(TransmissionReport { batch_id, emitted })
    }
}
