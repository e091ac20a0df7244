//! Namespace decorator tests

use infracache::{Cache, Context, MemoryCache, with_namespace};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn keys_are_prefixed_on_the_backend() {
    let ctx = Context::background();
    let backend = Arc::new(MemoryCache::new());
    let namespaced = with_namespace(backend.clone(), "ns");

    namespaced.set(&ctx, "foo", "bar").await.unwrap();

    // The raw key is untouched; the prefixed key holds the value.
    assert!(backend.get(&ctx, "foo").await.unwrap_err().is_not_found());
    assert_eq!(backend.get(&ctx, "ns:foo").await.unwrap(), "bar");
}

#[tokio::test]
async fn reads_and_errors_pass_through() {
    let ctx = Context::background();
    let backend = Arc::new(MemoryCache::new());
    let namespaced = with_namespace(backend.clone(), "ns");

    assert!(namespaced.get(&ctx, "missing").await.unwrap_err().is_not_found());

    namespaced.set(&ctx, "k", "v").await.unwrap();
    assert_eq!(namespaced.get(&ctx, "k").await.unwrap(), "v");
    assert!(namespaced.exists(&ctx, "k").await.unwrap());
}

#[tokio::test]
async fn del_prefixes_every_key() {
    let ctx = Context::background();
    let backend = Arc::new(MemoryCache::new());
    let namespaced = with_namespace(backend.clone(), "ns");

    namespaced.set(&ctx, "a", "1").await.unwrap();
    namespaced.set(&ctx, "b", "2").await.unwrap();
    backend.set(&ctx, "a", "raw").await.unwrap();

    namespaced.del(&ctx, &["a", "b"]).await.unwrap();

    assert!(!namespaced.exists(&ctx, "a").await.unwrap());
    assert!(!namespaced.exists(&ctx, "b").await.unwrap());
    // A raw key sharing the name is untouched.
    assert_eq!(backend.get(&ctx, "a").await.unwrap(), "raw");
}

#[tokio::test]
async fn ttl_writes_are_prefixed() {
    let ctx = Context::background();
    let backend = Arc::new(MemoryCache::new());
    let namespaced = with_namespace(backend.clone(), "ns");

    namespaced
        .set_with_ttl(&ctx, "t", "v", Duration::from_secs(60))
        .await
        .unwrap();
    assert!(backend.exists(&ctx, "ns:t").await.unwrap());
}

#[tokio::test]
async fn empty_namespace_returns_the_backend_unchanged() {
    let backend: Arc<dyn Cache> = Arc::new(MemoryCache::new());
    let wrapped = with_namespace(backend.clone(), "");
    assert!(Arc::ptr_eq(&backend, &wrapped));
}

#[tokio::test]
async fn provider_name_is_forwarded() {
    let backend: Arc<dyn Cache> = Arc::new(MemoryCache::new());
    let namespaced = with_namespace(backend, "ns");
    assert_eq!(namespaced.provider_name(), "memory");
}
