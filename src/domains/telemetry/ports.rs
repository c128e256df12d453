use crate::common::{ApplicationResult, DomainResult};
use crate::domains::telemetry::DataPoint;
use async_trait::async_trait;
use std::time::Duration;

/// Port for whatever produces the simulated collar data.
/// One call yields the whole ordered batch for `count` animals.
pub trait BulkDataGenerator: Send + Sync {
    fn generate_bulk_data(&self, count: usize) -> DomainResult<Vec<DataPoint>>;
}

/// Where records go once generated (stdout in the binary, memory in tests).
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    async fn send(&self, data_point: &DataPoint) -> ApplicationResult<()>;
}

/// Suspension between consecutive emissions.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, interval: Duration);
}
