//! Cache factory
//!
//! Validates options, constructs the selected backend, and composes the
//! decorator chain. The composed handle is immutable: it is either fully
//! constructed or construction failed.

use crate::namespace::with_namespace;
use crate::observed::with_observability;
use infracache_domain::error::Result;
use infracache_domain::options::{CacheOptions, Driver};
use infracache_domain::ports::cache::Cache;
use infracache_providers::{MemoryCache, RedisCache};
use std::sync::Arc;

/// Build a cache according to `options`.
///
/// Backend selection happens once, here; the handle never re-selects.
/// Redis construction performs a liveness check and propagates its failure.
///
/// The decorator order is fixed: observability wraps the backend and the
/// namespace decorator wraps observability, so telemetry always observes
/// the already-namespaced key. Recorded key lengths and the get hit/miss
/// flag therefore reflect the namespaced lookup, and the order is not
/// configurable.
pub async fn new_cache(options: CacheOptions) -> Result<Arc<dyn Cache>> {
    let backend: Arc<dyn Cache> = match options.driver {
        Driver::Memory => Arc::new(MemoryCache::new()),
        Driver::Redis => Arc::new(RedisCache::connect(&options).await?),
    };
    let cache = with_observability(backend, &options);
    Ok(with_namespace(cache, &options.namespace))
}
