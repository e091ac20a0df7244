//! # infracache - Backend Implementations
//!
//! Backends implementing the [`Cache`] port defined in `infracache-domain`.
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`MemoryCache`] | Local | Concurrent in-process map with per-key TTL |
//! | [`RedisCache`] | Distributed | Redis-backed for multi-instance deployments |
//! | [`NullCache`] | Testing | No-op stub that stores nothing |
//!
//! Backends normalize their native failures into the shared error taxonomy
//! at this boundary, once. Decorators (namespacing, observability) live in
//! the `infracache` crate and wrap any of these.

// Re-export domain types commonly used with providers
pub use infracache_domain::context::Context;
pub use infracache_domain::error::{Error, Result};
pub use infracache_domain::ports::cache::Cache;

/// In-process cache backend
pub mod memory;

/// No-op cache backend for testing and disabling caching
pub mod null;

/// Redis cache backend
pub mod redis;

pub use memory::MemoryCache;
pub use null::NullCache;
pub use redis::RedisCache;
