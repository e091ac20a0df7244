//! Factory composition tests

mod common;

use common::{RecordingLogger, RecordingTracer};
use infracache::{Cache, CacheOptions, Context, Driver, Error, new_cache};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn memory_driver_round_trip() {
    let ctx = Context::background();
    let cache = new_cache(CacheOptions::new(Driver::Memory)).await.unwrap();

    cache.set(&ctx, "k", "v").await.unwrap();
    assert_eq!(cache.get(&ctx, "k").await.unwrap(), "v");
    assert!(cache.exists(&ctx, "k").await.unwrap());

    cache.del(&ctx, &["k"]).await.unwrap();
    assert!(cache.get(&ctx, "k").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn memory_driver_honors_ttl() {
    let ctx = Context::background();
    let cache = new_cache(CacheOptions::new(Driver::Memory)).await.unwrap();

    cache
        .set_with_ttl(&ctx, "t", "v", Duration::from_millis(40))
        .await
        .unwrap();
    assert_eq!(cache.get(&ctx, "t").await.unwrap(), "v");

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(cache.get(&ctx, "t").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn telemetry_observes_the_namespaced_key() {
    let ctx = Context::background();
    let logger = Arc::new(RecordingLogger::default());
    let tracer = Arc::new(RecordingTracer::default());
    let options = CacheOptions::new(Driver::Memory)
        .with_namespace("ns")
        .with_logger(logger.clone())
        .with_tracer(tracer.clone());
    let cache = new_cache(options).await.unwrap();

    cache.set(&ctx, "foo", "bar").await.unwrap();

    // The namespace decorator sits outside observability, so the logged
    // key length is that of "ns:foo", not "foo".
    let records = logger.records.lock().unwrap();
    assert_eq!(records[0].key_len, "ns:foo".len());
    assert_eq!(records[0].namespace, "ns");

    let finished = tracer.finished.lock().unwrap();
    assert_eq!(finished[0].attribute("cache.key_len"), Some("6"));
}

#[tokio::test]
async fn namespaced_handles_are_isolated() {
    let ctx = Context::background();
    let a = new_cache(CacheOptions::new(Driver::Memory).with_namespace("a"))
        .await
        .unwrap();
    let b = new_cache(CacheOptions::new(Driver::Memory).with_namespace("b"))
        .await
        .unwrap();

    a.set(&ctx, "k", "from-a").await.unwrap();
    // Separate handles own separate stores; the point here is that the
    // composed chain keeps namespaces out of each other's way.
    assert!(b.get(&ctx, "k").await.unwrap_err().is_not_found());
    assert_eq!(a.get(&ctx, "k").await.unwrap(), "from-a");
}

#[tokio::test]
async fn redis_driver_requires_an_address() {
    let err = new_cache(CacheOptions::new(Driver::Redis))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[tokio::test]
async fn driver_parses_from_configuration_strings() {
    assert_eq!("memory".parse::<Driver>().unwrap(), Driver::Memory);
    assert_eq!("redis".parse::<Driver>().unwrap(), Driver::Redis);
    assert!(matches!(
        "mongo".parse::<Driver>(),
        Err(Error::Configuration { .. })
    ));
}
