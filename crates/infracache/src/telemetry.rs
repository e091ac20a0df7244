//! Telemetry capability adapters
//!
//! Production implementations of the telemetry ports on the tracing and
//! metrics ecosystems: [`TracingLogger`] emits one `tracing` event per
//! operation, [`TracingTracer`] one span, and [`MetricsMeter`] records the
//! `cache_ops_total` counter and `cache_latency_ms` histogram.
//!
//! All adapters are stateless; sinks are whatever subscriber/recorder the
//! embedding application installed.

use infracache_domain::error::Error;
use infracache_domain::ports::telemetry::{
    CacheLogger, CacheMeter, CacheSpan, CacheTracer, LogRecord, SpanValue,
};
use std::time::Duration;
use tracing::field::Empty;
use tracing::{Span, info_span};

/// Logger capability emitting one structured `tracing` event per operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a tracing-backed logger
    pub fn new() -> Self {
        Self
    }
}

impl CacheLogger for TracingLogger {
    fn log(&self, record: &LogRecord<'_>) {
        tracing::info!(
            target: "infracache",
            provider = record.provider,
            op = record.op,
            ns = record.namespace,
            key_len = record.key_len,
            dur_ms = u64::try_from(record.elapsed.as_millis()).unwrap_or(u64::MAX),
            error = record.error.map(tracing::field::display),
            "cache operation"
        );
    }
}

/// Tracer capability producing one `tracing` span per operation.
///
/// Span names in `tracing` are static, so the adapter matches the four
/// operation names to span literals; fields are declared empty and recorded
/// by the decorator through [`CacheSpan::set_attribute`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTracer;

impl TracingTracer {
    /// Create a tracing-backed tracer
    pub fn new() -> Self {
        Self
    }
}

macro_rules! cache_span {
    ($name:literal) => {
        info_span!(
            $name,
            cache.provider = Empty,
            cache.namespace = Empty,
            cache.key_len = Empty,
            cache.hit = Empty,
            error = Empty,
        )
    };
}

impl CacheTracer for TracingTracer {
    fn span(&self, name: &'static str) -> Box<dyn CacheSpan> {
        let span = match name {
            "cache.set" => cache_span!("cache.set"),
            "cache.get" => cache_span!("cache.get"),
            "cache.del" => cache_span!("cache.del"),
            _ => cache_span!("cache.exists"),
        };
        Box::new(TracingSpan { span })
    }
}

struct TracingSpan {
    span: Span,
}

impl CacheSpan for TracingSpan {
    fn set_attribute(&mut self, key: &'static str, value: SpanValue) {
        match value {
            SpanValue::Str(v) => {
                self.span.record(key, v.as_str());
            }
            SpanValue::Int(v) => {
                self.span.record(key, v);
            }
            SpanValue::Bool(v) => {
                self.span.record(key, v);
            }
        }
    }

    fn record_error(&mut self, error: &Error) {
        self.span.record("error", tracing::field::display(error));
    }

    fn end(self: Box<Self>) {
        // Dropping the span closes it.
    }
}

/// Meter capability recording through the `metrics` facade.
///
/// Instruments: `cache_ops_total` counter (provider, op, and hit for gets)
/// and `cache_latency_ms` histogram (provider, op).
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsMeter;

impl MetricsMeter {
    /// Create a metrics-backed meter
    pub fn new() -> Self {
        Self
    }
}

impl CacheMeter for MetricsMeter {
    fn record_operation(&self, provider: &str, op: &'static str, hit: Option<bool>) {
        let counter = match hit {
            Some(hit) => metrics::counter!(
                "cache_ops_total",
                "provider" => provider.to_string(),
                "op" => op,
                "hit" => if hit { "true" } else { "false" }
            ),
            None => metrics::counter!(
                "cache_ops_total",
                "provider" => provider.to_string(),
                "op" => op
            ),
        };
        counter.increment(1);
    }

    fn record_latency(&self, provider: &str, op: &'static str, elapsed: Duration) {
        metrics::histogram!(
            "cache_latency_ms",
            "provider" => provider.to_string(),
            "op" => op
        )
        .record(elapsed.as_secs_f64() * 1_000.0);
    }
}
