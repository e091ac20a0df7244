//! Null cache backend
//!
//! A backend that stores nothing. Writes succeed, reads miss. Useful in
//! tests and as a switch for disabling caching without touching call sites.

use async_trait::async_trait;
use infracache_domain::context::Context;
use infracache_domain::error::{Error, Result};
use infracache_domain::ports::cache::Cache;
use std::time::Duration;

/// No-op implementation of [`Cache`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl NullCache {
    /// Create a null cache
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Cache for NullCache {
    async fn set(&self, ctx: &Context, _key: &str, _value: &str) -> Result<()> {
        ctx.check()
    }

    async fn set_bytes(&self, ctx: &Context, _key: &str, _value: &[u8]) -> Result<()> {
        ctx.check()
    }

    async fn set_with_ttl(
        &self,
        ctx: &Context,
        _key: &str,
        _value: &str,
        _ttl: Duration,
    ) -> Result<()> {
        ctx.check()
    }

    async fn get(&self, ctx: &Context, _key: &str) -> Result<String> {
        ctx.check()?;
        Err(Error::NotFound)
    }

    async fn get_bytes(&self, ctx: &Context, _key: &str) -> Result<Vec<u8>> {
        ctx.check()?;
        Err(Error::NotFound)
    }

    async fn del(&self, ctx: &Context, _keys: &[&str]) -> Result<()> {
        ctx.check()
    }

    async fn exists(&self, ctx: &Context, _key: &str) -> Result<bool> {
        ctx.check()?;
        Ok(false)
    }

    fn provider_name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_writes_and_always_misses() {
        let ctx = Context::background();
        let cache = NullCache::new();

        cache.set(&ctx, "k", "v").await.unwrap();
        assert!(cache.get(&ctx, "k").await.unwrap_err().is_not_found());
        assert!(!cache.exists(&ctx, "k").await.unwrap());
        cache.del(&ctx, &["k"]).await.unwrap();
    }
}
