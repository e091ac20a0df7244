//! Telemetry capability ports
//!
//! Three independent, separately optional capabilities consumed by the
//! observability decorator: structured logging, trace spans, and metrics.
//! Each is represented as an `Option<Arc<dyn ...>>` checked once at
//! decoration time, so an absent capability costs nothing per call.
//!
//! Emission is infallible by construction: none of these traits return
//! errors, so a telemetry sink can never alter or fail a cache operation.
//! Records carry the key *length*, never key or value content, to keep
//! sensitive data out of logs and traces.

use crate::error::Error;
use std::time::Duration;

/// One structured record per cache operation.
#[derive(Debug)]
pub struct LogRecord<'a> {
    /// Backend identity (e.g. "memory", "redis")
    pub provider: &'a str,
    /// Operation name: "set", "get", "del" or "exists"
    pub op: &'static str,
    /// Configured namespace, empty when namespacing is disabled
    pub namespace: &'a str,
    /// Length of the (namespaced) key; zero for an empty `del`
    pub key_len: usize,
    /// Wall-clock duration of the wrapped call
    pub elapsed: Duration,
    /// The operation's error, if it failed
    pub error: Option<&'a Error>,
}

/// Structured-logging capability.
pub trait CacheLogger: Send + Sync {
    /// Emit one record for a completed operation
    fn log(&self, record: &LogRecord<'_>);
}

/// Attribute value set on a span.
#[derive(Debug, Clone)]
pub enum SpanValue {
    /// String attribute
    Str(String),
    /// Integer attribute
    Int(i64),
    /// Boolean attribute
    Bool(bool),
}

/// A span handle covering a single cache operation.
///
/// Attributes and errors are recorded before [`end`](CacheSpan::end) closes
/// the span.
pub trait CacheSpan: Send {
    /// Tag the span with an attribute
    fn set_attribute(&mut self, key: &'static str, value: SpanValue);

    /// Record the operation's error on the span
    fn record_error(&mut self, error: &Error);

    /// Close the span
    fn end(self: Box<Self>);
}

/// Tracing capability: begins one span per operation.
pub trait CacheTracer: Send + Sync {
    /// Start a span named `cache.<op>` (e.g. "cache.get")
    fn span(&self, name: &'static str) -> Box<dyn CacheSpan>;
}

/// Metrics capability: one counter increment and one latency observation
/// per operation.
pub trait CacheMeter: Send + Sync {
    /// Increment the operation counter.
    ///
    /// `hit` is set for get operations only and tags the increment with the
    /// hit/miss outcome.
    fn record_operation(&self, provider: &str, op: &'static str, hit: Option<bool>);

    /// Observe the operation's latency
    fn record_latency(&self, provider: &str, op: &'static str, elapsed: Duration);
}
