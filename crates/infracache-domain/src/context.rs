//! Execution context for cache operations
//!
//! Every [`Cache`](crate::ports::cache::Cache) operation takes a `Context`
//! carrying optional cancellation and deadline signals. Operations validate
//! the context before touching any store and fail fast with
//! [`Error::Timeout`] when it is already cancelled or past its deadline.
//! Remote backends additionally race in-flight network calls against
//! [`Context::done`] so cancellation aborts them.

use crate::error::{Error, Result};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellable, deadline-bearing execution context.
///
/// Cheap to clone; both signals are optional. A default context is never
/// cancelled and has no deadline.
#[derive(Clone, Debug, Default)]
pub struct Context {
    token: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: None,
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// A context with an absolute deadline
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: None,
            deadline: Some(deadline),
        }
    }

    /// A context cancelled through the given token
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token: Some(token),
            deadline: None,
        }
    }

    /// Add a deadline `timeout` from now, keeping any cancellation token
    pub fn and_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// The absolute deadline, if one is set
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail fast if the context is already cancelled or past its deadline.
    pub fn check(&self) -> Result<()> {
        if let Some(token) = &self.token {
            if token.is_cancelled() {
                return Err(Error::Timeout);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(Error::Timeout);
            }
        }
        Ok(())
    }

    /// Resolves when the context is cancelled or its deadline passes.
    ///
    /// Pending forever when neither signal is configured, so it is safe to
    /// race any operation against it with `tokio::select!`.
    pub async fn done(&self) {
        let cancelled = async {
            match &self.token {
                Some(token) => token.cancelled().await,
                None => std::future::pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::select! {
            () = cancelled => {}
            () = expired => {}
        }
    }
}
