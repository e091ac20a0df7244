//! Key namespacing decorator
//!
//! Rewrites every key to `namespace + ":" + key` before delegating, which
//! partitions a shared backend among logical tenants. Purely textual: the
//! decorator holds no state beyond the prefix, and results and errors pass
//! through unmodified.

use async_trait::async_trait;
use infracache_domain::context::Context;
use infracache_domain::error::Result;
use infracache_domain::ports::cache::Cache;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Wrap `cache` so every key is prefixed with `namespace` followed by `:`.
///
/// An empty namespace returns the wrapped instance unchanged: no wrapper is
/// allocated and the returned handle is the same `Arc`.
pub fn with_namespace(cache: Arc<dyn Cache>, namespace: &str) -> Arc<dyn Cache> {
    if namespace.is_empty() {
        return cache;
    }
    Arc::new(Namespaced {
        inner: cache,
        namespace: namespace.to_string(),
    })
}

struct Namespaced {
    inner: Arc<dyn Cache>,
    namespace: String,
}

impl Namespaced {
    fn prefix(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }
}

#[async_trait]
impl Cache for Namespaced {
    async fn set(&self, ctx: &Context, key: &str, value: &str) -> Result<()> {
        self.inner.set(ctx, &self.prefix(key), value).await
    }

    async fn set_bytes(&self, ctx: &Context, key: &str, value: &[u8]) -> Result<()> {
        self.inner.set_bytes(ctx, &self.prefix(key), value).await
    }

    async fn set_with_ttl(
        &self,
        ctx: &Context,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<()> {
        self.inner
            .set_with_ttl(ctx, &self.prefix(key), value, ttl)
            .await
    }

    async fn get(&self, ctx: &Context, key: &str) -> Result<String> {
        self.inner.get(ctx, &self.prefix(key)).await
    }

    async fn get_bytes(&self, ctx: &Context, key: &str) -> Result<Vec<u8>> {
        self.inner.get_bytes(ctx, &self.prefix(key)).await
    }

    async fn del(&self, ctx: &Context, keys: &[&str]) -> Result<()> {
        let prefixed: Vec<String> = keys.iter().map(|key| self.prefix(key)).collect();
        let refs: Vec<&str> = prefixed.iter().map(String::as_str).collect();
        self.inner.del(ctx, &refs).await
    }

    async fn exists(&self, ctx: &Context, key: &str) -> Result<bool> {
        self.inner.exists(ctx, &self.prefix(key)).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}

impl fmt::Debug for Namespaced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespaced")
            .field("namespace", &self.namespace)
            .field("inner", &self.inner)
            .finish()
    }
}
