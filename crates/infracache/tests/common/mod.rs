//! Shared recording telemetry capabilities for integration tests.
//!
//! Each stub captures what the observability decorator emits so tests can
//! assert on signals without a real subscriber or metrics recorder.

use infracache::{CacheLogger, CacheMeter, CacheSpan, CacheTracer, Error, LogRecord, SpanValue};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One captured log record
#[derive(Debug, Clone)]
pub struct LoggedOp {
    pub op: &'static str,
    pub namespace: String,
    pub key_len: usize,
    pub failed: bool,
}

#[derive(Debug, Default)]
pub struct RecordingLogger {
    pub records: Mutex<Vec<LoggedOp>>,
}

impl RecordingLogger {
    pub fn ops(&self) -> Vec<&'static str> {
        self.records.lock().unwrap().iter().map(|r| r.op).collect()
    }
}

impl CacheLogger for RecordingLogger {
    fn log(&self, record: &LogRecord<'_>) {
        self.records.lock().unwrap().push(LoggedOp {
            op: record.op,
            namespace: record.namespace.to_string(),
            key_len: record.key_len,
            failed: record.error.is_some(),
        });
    }
}

/// One captured, ended span
#[derive(Debug, Clone, Default)]
pub struct FinishedSpan {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub error: Option<String>,
}

impl FinishedSpan {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Default)]
pub struct RecordingTracer {
    pub finished: Arc<Mutex<Vec<FinishedSpan>>>,
}

impl CacheTracer for RecordingTracer {
    fn span(&self, name: &'static str) -> Box<dyn CacheSpan> {
        Box::new(RecordingSpan {
            data: FinishedSpan {
                name,
                ..FinishedSpan::default()
            },
            sink: Arc::clone(&self.finished),
        })
    }
}

struct RecordingSpan {
    data: FinishedSpan,
    sink: Arc<Mutex<Vec<FinishedSpan>>>,
}

impl CacheSpan for RecordingSpan {
    fn set_attribute(&mut self, key: &'static str, value: SpanValue) {
        let rendered = match value {
            SpanValue::Str(v) => v,
            SpanValue::Int(v) => v.to_string(),
            SpanValue::Bool(v) => v.to_string(),
        };
        self.data.attributes.push((key, rendered));
    }

    fn record_error(&mut self, error: &Error) {
        self.data.error = Some(error.to_string());
    }

    fn end(self: Box<Self>) {
        self.sink.lock().unwrap().push(self.data);
    }
}

#[derive(Debug, Default)]
pub struct RecordingMeter {
    pub operations: Mutex<Vec<(&'static str, Option<bool>)>>,
    pub latencies: Mutex<Vec<(&'static str, Duration)>>,
}

impl CacheMeter for RecordingMeter {
    fn record_operation(&self, _provider: &str, op: &'static str, hit: Option<bool>) {
        self.operations.lock().unwrap().push((op, hit));
    }

    fn record_latency(&self, _provider: &str, op: &'static str, elapsed: Duration) {
        self.latencies.lock().unwrap().push((op, elapsed));
    }
}
