//! In-memory cache backend
//!
//! A concurrent map guarded by a single reader/writer lock for the whole
//! instance (no per-key locks). Reads take the shared lock, writes the
//! exclusive one, which gives a total order of writes per key and
//! read-after-write visibility to any reader acquiring the lock afterwards.
//!
//! TTL is handled lazily: each entry stores an optional expiration instant
//! checked on every read and `exists`. An expired entry is indistinguishable
//! from an absent one, and overwriting a key replaces its expiration along
//! with its value, so a stale deadline can never delete a newer value.
//! [`MemoryCache::purge_expired`] reclaims memory from entries that expired
//! but were never read again; callers own the sweep schedule.

use async_trait::async_trait;
use infracache_domain::context::Context;
use infracache_domain::error::{Error, Result};
use infracache_domain::ports::cache::Cache;
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

struct Entry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// In-memory implementation of [`Cache`].
///
/// Safe for concurrent use. Values are deep-copied on both write and read,
/// so callers can never observe or induce mutation through aliasing.
pub struct MemoryCache {
    store: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Create an empty in-memory cache
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Remove entries whose TTL has passed, returning how many were evicted.
    ///
    /// Purely a memory-reclamation sweep: expired entries are already
    /// unreadable whether or not this runs.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut store = self
            .store
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = store.len();
        store.retain(|_, entry| !entry.is_expired(now));
        before - store.len()
    }

    fn write_entry(&self, key: &str, value: &[u8], expires_at: Option<Instant>) {
        let mut store = self
            .store
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        store.insert(
            key.to_string(),
            Entry {
                value: value.to_vec(),
                expires_at,
            },
        );
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn set(&self, ctx: &Context, key: &str, value: &str) -> Result<()> {
        self.set_bytes(ctx, key, value.as_bytes()).await
    }

    async fn set_bytes(&self, ctx: &Context, key: &str, value: &[u8]) -> Result<()> {
        ctx.check()?;
        self.write_entry(key, value, None);
        Ok(())
    }

    async fn set_with_ttl(
        &self,
        ctx: &Context,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<()> {
        ctx.check()?;
        let expires_at = (ttl > Duration::ZERO).then(|| Instant::now() + ttl);
        self.write_entry(key, value.as_bytes(), expires_at);
        Ok(())
    }

    async fn get(&self, ctx: &Context, key: &str) -> Result<String> {
        let bytes = self.get_bytes(ctx, key).await?;
        String::from_utf8(bytes).map_err(Error::backend)
    }

    async fn get_bytes(&self, ctx: &Context, key: &str) -> Result<Vec<u8>> {
        ctx.check()?;
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        match store.get(key) {
            Some(entry) if !entry.is_expired(Instant::now()) => Ok(entry.value.clone()),
            _ => Err(Error::NotFound),
        }
    }

    async fn del(&self, ctx: &Context, keys: &[&str]) -> Result<()> {
        ctx.check()?;
        if keys.is_empty() {
            return Ok(());
        }
        let mut store = self
            .store
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for key in keys {
            store.remove(*key);
        }
        Ok(())
    }

    async fn exists(&self, ctx: &Context, key: &str) -> Result<bool> {
        ctx.check()?;
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        Ok(store
            .get(key)
            .is_some_and(|entry| !entry.is_expired(Instant::now())))
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}

impl fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .store
            .read()
            .map(|store| store.len())
            .unwrap_or_default();
        f.debug_struct("MemoryCache").field("entries", &entries).finish()
    }
}
