//! Error handling types
//!
//! The unified taxonomy every backend normalizes into. Backends map their
//! native failures at the boundary, once; decorators observe and forward
//! without reinterpreting. Callers branch on kind without inspecting
//! backend-specific detail.

use thiserror::Error;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error taxonomy for all cache backends and decorators.
#[derive(Error, Debug)]
pub enum Error {
    /// Key absent or expired at read time
    #[error("cache: not found")]
    NotFound,

    /// Execution context cancelled or deadline exceeded, local or remote
    #[error("cache: timeout")]
    Timeout,

    /// Backend has been shut down
    ///
    /// Reserved for forward compatibility; not actively produced by this
    /// core, but part of the taxonomy contract.
    #[error("cache: closed")]
    Closed,

    /// Invalid configuration handed to the factory
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },

    /// Backend-native error not recognized by the taxonomy, surfaced unchanged
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Wrap a backend-native error as a passthrough
    pub fn backend<E: std::error::Error + Send + Sync + 'static>(source: E) -> Self {
        Self::Backend(Box::new(source))
    }

    /// True if the key was absent or expired at read time
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// True if the execution context was cancelled or its deadline passed
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}
