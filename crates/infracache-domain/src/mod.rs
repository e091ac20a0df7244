//! # infracache - Domain Layer
//!
//! Core types shared by every backend and decorator: the error taxonomy,
//! the cancellable execution context, the [`Cache`] port, the telemetry
//! capability ports, and the flat [`CacheOptions`] value object.
//!
//! This crate holds contracts only. Backend implementations live in
//! `infracache-providers`; decorators and the factory live in `infracache`.

/// Cancellable, deadline-bearing execution context
pub mod context;

/// Error taxonomy all backends normalize into
pub mod error;

/// Flat cache configuration value object
pub mod options;

/// Port traits (cache contract, telemetry capabilities)
pub mod ports;

pub use context::Context;
pub use error::{Error, Result};
pub use options::{CacheOptions, Driver};
pub use ports::cache::Cache;
pub use ports::telemetry::{CacheLogger, CacheMeter, CacheSpan, CacheTracer, LogRecord, SpanValue};
