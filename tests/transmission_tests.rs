use async_trait::async_trait;
use elk_collar_sim::adapters::outbound::{init_noop_logger, WriterSink};
use elk_collar_sim::application::TransmissionService;
use elk_collar_sim::common::{ApplicationError, ApplicationResult, DomainError, DomainResult};
use elk_collar_sim::domains::telemetry::*;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct StubGenerator {
    records: Vec<String>,
    calls: Mutex<Vec<usize>>,
}

impl StubGenerator {
    fn new<S: Into<String>>(records: impl IntoIterator<Item = S>) -> Self {
        Self { records: records.into_iter().map(Into::into).collect(), calls: Mutex::new(Vec::new()) }
    }
}

impl BulkDataGenerator for StubGenerator {
    fn generate_bulk_data(&self, count: usize) -> DomainResult<Vec<DataPoint>> {
        self.calls.lock().unwrap().push(count);
        Ok(self.records.iter().cloned().map(DataPoint::from).collect())
    }
}

struct FailingGenerator;

impl BulkDataGenerator for FailingGenerator {
    fn generate_bulk_data(&self, _count: usize) -> DomainResult<Vec<DataPoint>> {
        Err(DomainError::Generation("collar logic unavailable".to_string()))
    }
}

#[derive(Default)]
struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, interval: Duration) {
        self.pauses.lock().unwrap().push(interval);
    }
}

/// Records sends and pauses in one timeline so their interleaving can be checked.
#[derive(Default)]
struct Timeline {
    events: Mutex<Vec<String>>,
    fail_on: Option<usize>,
}

#[async_trait]
impl TelemetrySink for Timeline {
    async fn send(&self, data_point: &DataPoint) -> ApplicationResult<()> {
        let mut events = self.events.lock().unwrap();
        let sent = events.iter().filter(|e| e.starts_with("send:")).count();
        if self.fail_on == Some(sent + 1) {
            return Err(ApplicationError::Sink("endpoint closed".to_string()));
        }
        events.push(format!("send:{}", data_point));
        Ok(())
    }
}

#[async_trait]
impl Pacer for Timeline {
    async fn pause(&self, interval: Duration) {
        self.events.lock().unwrap().push(format!("pause:{}ms", interval.as_millis()));
    }
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

const ELK: [&str; 3] = ["elk-1,10.0,20.0", "elk-2,11.0,21.0", "elk-3,12.0,22.0"];

#[tokio::test]
async fn test_stubbed_records_are_printed_in_order() {
    let buffer = SharedBuffer::default();
    let generator = Arc::new(StubGenerator::new(ELK));
    let service = TransmissionService::new(
        generator.clone(),
        Arc::new(WriterSink::new(buffer.clone(), "")),
        Arc::new(RecordingPacer::default()),
        init_noop_logger(),
        Duration::from_secs(2),
    );

    let report = service.run(3).await.unwrap();

    assert_eq!(report.emitted, 3);
    assert_eq!(*generator.calls.lock().unwrap(), vec![3]);
    let out = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert_eq!(out.lines().collect::<Vec<_>>(), ELK.to_vec());
}

#[tokio::test]
async fn test_generator_called_once_with_the_herd_size() {
    let records: Vec<String> = (1..=20).map(|i| format!("elk-{},{}.0,{}.0", i, i, i + 10)).collect();
    let generator = Arc::new(StubGenerator::new(records.clone()));
    let timeline = Arc::new(Timeline::default());
    let service = TransmissionService::new(
        generator.clone(),
        timeline.clone(),
        Arc::new(RecordingPacer::default()),
        init_noop_logger(),
        Duration::from_secs(2),
    );

    let report = service.run(20).await.unwrap();

    assert_eq!(*generator.calls.lock().unwrap(), vec![20]);
    assert_eq!(report.emitted, 20);
    let sent: Vec<String> = timeline.events.lock().unwrap().clone();
    let expected: Vec<String> = records.iter().map(|r| format!("send:{}", r)).collect();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn test_fixed_pause_between_consecutive_emissions() {
    let timeline = Arc::new(Timeline::default());
    let service = TransmissionService::new(
        Arc::new(StubGenerator::new(ELK)),
        timeline.clone(),
        timeline.clone(),
        init_noop_logger(),
        Duration::from_millis(2000),
    );

    service.run(3).await.unwrap();

    let events = timeline.events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            "send:elk-1,10.0,20.0",
            "pause:2000ms",
            "send:elk-2,11.0,21.0",
            "pause:2000ms",
            "send:elk-3,12.0,22.0",
        ]
    );
}

#[tokio::test]
async fn test_generator_failure_emits_nothing() {
    let timeline = Arc::new(Timeline::default());
    let service = TransmissionService::new(
        Arc::new(FailingGenerator),
        timeline.clone(),
        timeline.clone(),
        init_noop_logger(),
        Duration::from_secs(2),
    );

    let result = service.run(20).await;

    assert!(matches!(result, Err(ApplicationError::Domain(DomainError::Generation(_)))));
    assert!(timeline.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_sink_failure_stops_the_run() {
    let timeline = Arc::new(Timeline { fail_on: Some(2), ..Timeline::default() });
    let service = TransmissionService::new(
        Arc::new(StubGenerator::new(ELK)),
        timeline.clone(),
        timeline.clone(),
        init_noop_logger(),
        Duration::from_secs(2),
    );

    let result = service.run(3).await;

    assert!(matches!(result, Err(ApplicationError::Sink(_))));
    let events = timeline.events.lock().unwrap().clone();
    assert_eq!(events, vec!["send:elk-1,10.0,20.0", "pause:2000ms"]);
}

#[tokio::test]
async fn test_empty_batch_emits_and_pauses_nothing() {
    let timeline = Arc::new(Timeline::default());
    let service = TransmissionService::new(
        Arc::new(StubGenerator::new(Vec::<String>::new())),
        timeline.clone(),
        timeline.clone(),
        init_noop_logger(),
        Duration::from_secs(2),
    );

    let report = service.run(0).await.unwrap();

    assert_eq!(report.emitted, 0);
    assert!(timeline.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_collar_generator_through_the_service() {
    let generator = CollarDataGenerator::new(CollarSettings {
        fixes_per_elk: 2,
        seed: Some(5),
        ..CollarSettings::default()
    })
    .unwrap();
    let pacer = Arc::new(RecordingPacer::default());
    let buffer = SharedBuffer::default();
    let service = TransmissionService::new(
        Arc::new(generator),
        Arc::new(WriterSink::new(buffer.clone(), "")),
        pacer.clone(),
        init_noop_logger(),
        Duration::from_secs(2),
    );

    let report = service.run(20).await.unwrap();

    assert_eq!(report.emitted, 40);
    assert_eq!(pacer.pauses.lock().unwrap().len(), 39);
    let out = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 40);
    assert!(lines[0].starts_with("elk-1,"));
    assert!(lines[20].starts_with("elk-1,"));
    assert!(lines.iter().all(|l| l.split(',').count() == 4));
}
