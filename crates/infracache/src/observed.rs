//! Observability decorator
//!
//! Wraps any [`Cache`] with up to three independent telemetry signals:
//! structured logs, trace spans, and metrics. All three observe and forward;
//! the wrapped call's value and error are returned untouched, and a slow or
//! absent sink can neither delay nor fail the operation beyond the emit
//! itself.
//!
//! Records carry the key length, never key or value content. `set_bytes` and
//! `set_with_ttl` report as "set", `get_bytes` as "get", matching the four
//! operation tags used across logs, spans, and metrics.

use infracache_domain::context::Context;
use infracache_domain::error::{Error, Result};
use infracache_domain::options::CacheOptions;
use infracache_domain::ports::cache::Cache;
use infracache_domain::ports::telemetry::{
    CacheLogger, CacheMeter, CacheSpan, CacheTracer, LogRecord, SpanValue,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Wrap `cache` with the telemetry capabilities configured in `options`.
///
/// With no logger, tracer, or meter configured this returns the wrapped
/// instance unchanged (the same `Arc`, no wrapper allocated).
pub fn with_observability(cache: Arc<dyn Cache>, options: &CacheOptions) -> Arc<dyn Cache> {
    if !options.telemetry_enabled() {
        return cache;
    }
    let provider = cache.provider_name();
    Arc::new(Observed {
        inner: cache,
        provider,
        namespace: options.namespace.clone(),
        logger: options.logger.clone(),
        tracer: options.tracer.clone(),
        meter: options.meter.clone(),
    })
}

#[derive(Clone, Copy)]
enum Op {
    Set,
    Get,
    Del,
    Exists,
}

impl Op {
    fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Get => "get",
            Self::Del => "del",
            Self::Exists => "exists",
        }
    }

    fn span_name(self) -> &'static str {
        match self {
            Self::Set => "cache.set",
            Self::Get => "cache.get",
            Self::Del => "cache.del",
            Self::Exists => "cache.exists",
        }
    }
}

struct Observed {
    inner: Arc<dyn Cache>,
    provider: &'static str,
    namespace: String,
    logger: Option<Arc<dyn CacheLogger>>,
    tracer: Option<Arc<dyn CacheTracer>>,
    meter: Option<Arc<dyn CacheMeter>>,
}

impl Observed {
    fn start_span(&self, op: Op) -> Option<Box<dyn CacheSpan>> {
        self.tracer.as_ref().map(|tracer| tracer.span(op.span_name()))
    }

    /// Emit all configured signals for a completed operation.
    ///
    /// `hit` is set for get operations only.
    fn finish(
        &self,
        op: Op,
        key_len: usize,
        hit: Option<bool>,
        elapsed: Duration,
        error: Option<&Error>,
        span: Option<Box<dyn CacheSpan>>,
    ) {
        if let Some(logger) = &self.logger {
            logger.log(&LogRecord {
                provider: self.provider,
                op: op.as_str(),
                namespace: &self.namespace,
                key_len,
                elapsed,
                error,
            });
        }
        if let Some(mut span) = span {
            span.set_attribute("cache.provider", SpanValue::Str(self.provider.to_string()));
            span.set_attribute("cache.namespace", SpanValue::Str(self.namespace.clone()));
            let key_len = i64::try_from(key_len).unwrap_or(i64::MAX);
            span.set_attribute("cache.key_len", SpanValue::Int(key_len));
            if let Some(hit) = hit {
                span.set_attribute("cache.hit", SpanValue::Bool(hit));
            }
            if let Some(error) = error {
                span.record_error(error);
            }
            span.end();
        }
        if let Some(meter) = &self.meter {
            meter.record_operation(self.provider, op.as_str(), hit);
            meter.record_latency(self.provider, op.as_str(), elapsed);
        }
    }
}

#[async_trait]
impl Cache for Observed {
    async fn set(&self, ctx: &Context, key: &str, value: &str) -> Result<()> {
        let key_len = key.len();
        let span = self.start_span(Op::Set);
        let start = Instant::now();
        let result = self.inner.set(ctx, key, value).await;
        self.finish(
            Op::Set,
            key_len,
            None,
            start.elapsed(),
            result.as_ref().err(),
            span,
        );
        result
    }

    async fn set_bytes(&self, ctx: &Context, key: &str, value: &[u8]) -> Result<()> {
        let key_len = key.len();
        let span = self.start_span(Op::Set);
        let start = Instant::now();
        let result = self.inner.set_bytes(ctx, key, value).await;
        self.finish(
            Op::Set,
            key_len,
            None,
            start.elapsed(),
            result.as_ref().err(),
            span,
        );
        result
    }

    async fn set_with_ttl(
        &self,
        ctx: &Context,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<()> {
        let key_len = key.len();
        let span = self.start_span(Op::Set);
        let start = Instant::now();
        let result = self.inner.set_with_ttl(ctx, key, value, ttl).await;
        self.finish(
            Op::Set,
            key_len,
            None,
            start.elapsed(),
            result.as_ref().err(),
            span,
        );
        result
    }

    async fn get(&self, ctx: &Context, key: &str) -> Result<String> {
        let key_len = key.len();
        let span = self.start_span(Op::Get);
        let start = Instant::now();
        let result = self.inner.get(ctx, key).await;
        self.finish(
            Op::Get,
            key_len,
            Some(result.is_ok()),
            start.elapsed(),
            result.as_ref().err(),
            span,
        );
        result
    }

    async fn get_bytes(&self, ctx: &Context, key: &str) -> Result<Vec<u8>> {
        let key_len = key.len();
        let span = self.start_span(Op::Get);
        let start = Instant::now();
        let result = self.inner.get_bytes(ctx, key).await;
        self.finish(
            Op::Get,
            key_len,
            Some(result.is_ok()),
            start.elapsed(),
            result.as_ref().err(),
            span,
        );
        result
    }

    async fn del(&self, ctx: &Context, keys: &[&str]) -> Result<()> {
        let key_len = keys.first().map_or(0, |key| key.len());
        let span = self.start_span(Op::Del);
        let start = Instant::now();
        let result = self.inner.del(ctx, keys).await;
        self.finish(
            Op::Del,
            key_len,
            None,
            start.elapsed(),
            result.as_ref().err(),
            span,
        );
        result
    }

    async fn exists(&self, ctx: &Context, key: &str) -> Result<bool> {
        let key_len = key.len();
        let span = self.start_span(Op::Exists);
        let start = Instant::now();
        let result = self.inner.exists(ctx, key).await;
        self.finish(
            Op::Exists,
            key_len,
            None,
            start.elapsed(),
            result.as_ref().err(),
            span,
        );
        result
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }
}

impl fmt::Debug for Observed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observed")
            .field("provider", &self.provider)
            .field("namespace", &self.namespace)
            .field("logger", &self.logger.is_some())
            .field("tracer", &self.tracer.is_some())
            .field("meter", &self.meter.is_some())
            .finish()
    }
}
