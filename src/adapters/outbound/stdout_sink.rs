use crate::common::{ApplicationError, ApplicationResult};
use crate::domains::telemetry::{DataPoint, TelemetrySink};
use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::Mutex;

/// Line-oriented sink: every data point becomes `<prefix><record>\n` on the wrapped writer.
pub struct WriterSink<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

pub type StdoutSink = WriterSink<io::Stdout>;

impl StdoutSink {
    pub fn stdout(prefix: impl Into<String>) -> Self {
        WriterSink::new(io::stdout(), prefix)
    }
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), writer: Mutex::new(writer) }
    }

    pub fn into_inner(self) -> ApplicationResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| ApplicationError::Sink(format!("writer lock poisoned: {}", e)))
    }
}

#[async_trait]
impl<W: Write + Send> TelemetrySink for WriterSink<W> {
    async fn send(&self, data_point: &DataPoint) -> ApplicationResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| ApplicationError::Sink(format!("writer lock poisoned: {}", e)))?;
        writeln!(writer, "{}{}", self.prefix, data_point)
            .and_then(|_| writer.flush())
            .map_err(|e| ApplicationError::Sink(e.to_string()))
    }
}
