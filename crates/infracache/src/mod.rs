//! # infracache
//!
//! A uniform caching abstraction: one contract, interchangeable backends,
//! composed with optional cross-cutting decorators.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`Cache`] | The operation set every backend and decorator implements |
//! | [`MemoryCache`] | Concurrent in-process map with per-key TTL |
//! | [`RedisCache`] | Remote adapter over the async Redis client |
//! | [`with_namespace`] | Prefixes every key with `namespace + ":"` |
//! | [`with_observability`] | Structured logs, trace spans, metrics per call |
//! | [`new_cache`] | Validates options, builds the backend, composes decorators |
//!
//! ## Usage
//!
//! ```ignore
//! use infracache::{new_cache, CacheOptions, Context, Driver};
//!
//! let cache = new_cache(CacheOptions::new(Driver::Memory).with_namespace("tenant-a")).await?;
//! let ctx = Context::background();
//! cache.set(&ctx, "greeting", "hello").await?;
//! assert_eq!(cache.get(&ctx, "greeting").await?, "hello");
//! ```
//!
//! Decorator composition is fixed at construction: the observability
//! decorator wraps the backend and the namespace decorator wraps
//! observability, so telemetry always observes the already-namespaced key.

// Re-export the domain surface consumers program against
pub use infracache_domain::context::Context;
pub use infracache_domain::error::{Error, Result};
pub use infracache_domain::options::{CacheOptions, Driver};
pub use infracache_domain::ports::cache::Cache;
pub use infracache_domain::ports::telemetry::{
    CacheLogger, CacheMeter, CacheSpan, CacheTracer, LogRecord, SpanValue,
};

// Re-export the backends
pub use infracache_providers::{MemoryCache, NullCache, RedisCache};

/// Cache factory: options in, composed handle out
pub mod factory;

/// Structured logging bootstrap for embedding binaries
pub mod logging;

/// Key namespacing decorator
pub mod namespace;

/// Observability decorator
pub mod observed;

/// Telemetry capability adapters backed by `tracing` and `metrics`
pub mod telemetry;

pub use factory::new_cache;
pub use namespace::with_namespace;
pub use observed::with_observability;
pub use telemetry::{MetricsMeter, TracingLogger, TracingTracer};
