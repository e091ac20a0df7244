//! Cache Port
//!
//! The unified cache contract for in-memory and Redis backends. It is
//! intentionally string-focused with byte helpers for binary payloads;
//! values are opaque to the cache.
//!
//! Every operation takes a [`Context`] and must validate it first: a context
//! that is already cancelled or past its deadline fails with
//! [`Timeout`](crate::error::Error::Timeout) before the store is touched.

use crate::context::Context;
use crate::error::Result;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;

/// Cache contract implemented by every backend and decorator.
///
/// From the caller's view a key with no live entry is indistinguishable
/// between "never set" and "expired": both read as
/// [`NotFound`](crate::error::Error::NotFound).
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Unconditionally upsert `key` with no expiration
    async fn set(&self, ctx: &Context, key: &str, value: &str) -> Result<()>;

    /// Same as [`set`](Cache::set) for binary payloads
    async fn set_bytes(&self, ctx: &Context, key: &str, value: &[u8]) -> Result<()>;

    /// Upsert `key` with an expiration horizon.
    ///
    /// A zero `ttl` behaves as [`set`](Cache::set): the entry never expires.
    async fn set_with_ttl(&self, ctx: &Context, key: &str, value: &str, ttl: Duration)
    -> Result<()>;

    /// Read `key`, failing with `NotFound` if absent or expired
    async fn get(&self, ctx: &Context, key: &str) -> Result<String>;

    /// Read `key` as bytes, failing with `NotFound` if absent or expired
    async fn get_bytes(&self, ctx: &Context, key: &str) -> Result<Vec<u8>>;

    /// Remove zero or more keys.
    ///
    /// Missing keys are not errors. An empty slice is a no-op that still
    /// validates the execution context.
    async fn del(&self, ctx: &Context, keys: &[&str]) -> Result<()>;

    /// True iff a live (non-expired) entry exists; never fails with `NotFound`
    async fn exists(&self, ctx: &Context, key: &str) -> Result<bool>;

    /// Identifier used as the telemetry provider tag (e.g. "memory", "redis").
    ///
    /// Decorators forward the wrapped backend's identity.
    fn provider_name(&self) -> &'static str;
}
