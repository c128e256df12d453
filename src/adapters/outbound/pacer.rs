use crate::domains::telemetry::Pacer;
use async_trait::async_trait;
use std::time::Duration;

/// Pacer backed by the tokio timer.
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }
}
