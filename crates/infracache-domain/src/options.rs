//! Flat cache configuration
//!
//! [`CacheOptions`] is deliberately flat to keep call sites simple: a driver
//! selector, a namespace, Redis connection parameters, and three optional
//! telemetry capabilities. The data fields round-trip through serde; the
//! capability handles are runtime-only and skipped.

use crate::error::Error;
use crate::ports::telemetry::{CacheLogger, CacheMeter, CacheTracer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Cache backend driver tag.
///
/// Selected once at factory time; the composed handle never re-selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// In-process concurrent map with per-key TTL
    #[default]
    Memory,
    /// Redis-backed remote store, TTL enforced server-side
    Redis,
}

impl Driver {
    /// The driver's configuration tag
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Redis => "redis",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Driver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(Error::configuration(format!(
                "unknown cache driver: {other}"
            ))),
        }
    }
}

/// Configuration for cache construction.
///
/// Built with the `with_*` methods and handed to the factory. Telemetry
/// capabilities are each independently optional; leaving all three unset
/// makes the observability decorator a no-op identity wrapper.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheOptions {
    /// Backend selector
    pub driver: Driver,
    /// Key prefix applied by the namespace decorator; empty disables it
    pub namespace: String,

    /// Redis address as `host:port` (Redis driver only)
    pub addr: String,
    /// Redis logical database index (Redis driver only)
    pub db: i64,
    /// Redis username, empty for none (Redis driver only)
    pub username: String,
    /// Redis password, empty for none (Redis driver only)
    pub password: String,
    /// Connect to Redis over TLS (Redis driver only)
    pub tls: bool,

    /// Structured-logging capability
    #[serde(skip)]
    pub logger: Option<Arc<dyn CacheLogger>>,
    /// Tracing capability
    #[serde(skip)]
    pub tracer: Option<Arc<dyn CacheTracer>>,
    /// Metrics capability
    #[serde(skip)]
    pub meter: Option<Arc<dyn CacheMeter>>,
}

impl CacheOptions {
    /// Create options for the given driver with everything else defaulted
    pub fn new(driver: Driver) -> Self {
        Self {
            driver,
            ..Self::default()
        }
    }

    /// Set the key namespace
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the Redis address (`host:port`)
    pub fn with_addr<S: Into<String>>(mut self, addr: S) -> Self {
        self.addr = addr.into();
        self
    }

    /// Set the Redis logical database index
    pub fn with_db(mut self, db: i64) -> Self {
        self.db = db;
        self
    }

    /// Set the Redis credentials
    pub fn with_credentials<U: Into<String>, P: Into<String>>(
        mut self,
        username: U,
        password: P,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Enable TLS for the Redis connection
    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    /// Attach a structured-logging capability
    pub fn with_logger(mut self, logger: Arc<dyn CacheLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Attach a tracing capability
    pub fn with_tracer(mut self, tracer: Arc<dyn CacheTracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Attach a metrics capability
    pub fn with_meter(mut self, meter: Arc<dyn CacheMeter>) -> Self {
        self.meter = Some(meter);
        self
    }

    /// True if at least one telemetry capability is configured
    pub fn telemetry_enabled(&self) -> bool {
        self.logger.is_some() || self.tracer.is_some() || self.meter.is_some()
    }
}

impl fmt::Debug for CacheOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheOptions")
            .field("driver", &self.driver)
            .field("namespace", &self.namespace)
            .field("addr", &self.addr)
            .field("db", &self.db)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("tls", &self.tls)
            .field("logger", &self.logger.is_some())
            .field("tracer", &self.tracer.is_some())
            .field("meter", &self.meter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_parses_known_tags() {
        assert_eq!("memory".parse::<Driver>().unwrap(), Driver::Memory);
        assert_eq!("redis".parse::<Driver>().unwrap(), Driver::Redis);
    }

    #[test]
    fn driver_rejects_unknown_tag() {
        let err = "memcached".parse::<Driver>().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("unknown cache driver"));
    }

    #[test]
    fn driver_round_trips_through_serde() {
        let json = serde_json::to_string(&Driver::Redis).unwrap();
        assert_eq!(json, "\"redis\"");
        let back: Driver = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Driver::Redis);
    }

    #[test]
    fn builder_sets_fields() {
        let opts = CacheOptions::new(Driver::Redis)
            .with_namespace("tenant-a")
            .with_addr("localhost:6379")
            .with_db(2)
            .with_credentials("app", "secret")
            .with_tls(true);

        assert_eq!(opts.driver, Driver::Redis);
        assert_eq!(opts.namespace, "tenant-a");
        assert_eq!(opts.addr, "localhost:6379");
        assert_eq!(opts.db, 2);
        assert_eq!(opts.username, "app");
        assert_eq!(opts.password, "secret");
        assert!(opts.tls);
        assert!(!opts.telemetry_enabled());
    }

    #[test]
    fn debug_redacts_password() {
        let opts = CacheOptions::new(Driver::Redis).with_credentials("app", "secret");
        let rendered = format!("{opts:?}");
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: CacheOptions = serde_json::from_str(r#"{"driver":"memory"}"#).unwrap();
        assert_eq!(opts.driver, Driver::Memory);
        assert!(opts.namespace.is_empty());
        assert!(opts.logger.is_none());
    }
}
