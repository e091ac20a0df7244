//! Port traits
//!
//! Contracts implemented by backends and decorators. Following the layered
//! layout, implementations live in `infracache-providers` (backends) and
//! `infracache` (decorators, telemetry adapters).

/// The cache contract every backend and decorator implements
pub mod cache;

/// Optional telemetry capabilities consumed by the observability decorator
pub mod telemetry;

pub use cache::Cache;
pub use telemetry::{CacheLogger, CacheMeter, CacheSpan, CacheTracer, LogRecord, SpanValue};
