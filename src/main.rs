//! InMem Cache demo
//!
//! Fills a namespace past its capacity and logs how the sweeper brings it
//! back under the bound, then lets the remaining entries expire.

use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inmem_cache::timeouts::{TIMEOUT_1S, TIMEOUT_5S};
use inmem_cache::{CacheEvent, Config, EventKind, InMemCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inmem_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: max_count={}, cleanup_interval={}ms, default_ttl={}ms",
        config.max_count, config.cleanup_interval_ms, config.default_ttl_ms
    );

    let cache: InMemCache<String> = InMemCache::detached(&config);
    for kind in [EventKind::Status, EventKind::Expired, EventKind::Overflow] {
        cache.on(kind, |event: &CacheEvent<String>| match event {
            CacheEvent::Status(status) => info!("status: {}", status),
            other => {
                if let Some((namespace, key)) = other.entry_key() {
                    info!("{}: {}/{}", other.name(), namespace, key);
                }
            }
        });
    }

    cache.set_namespace_max_count("demo", 5);
    cache.init(&config)?;

    for i in 1..=7 {
        cache.set("demo", &format!("key{i}"), format!("value{i}"), Some(TIMEOUT_5S));
    }
    cache.set("demo", "key8", "value8".to_string(), Some(TIMEOUT_5S + TIMEOUT_1S));
    info!("Size is {}", cache.size(None));

    tokio::time::sleep(Duration::from_secs(2)).await;
    info!("Size is {}", cache.size(None));

    tokio::time::sleep(Duration::from_millis(3500)).await;
    info!("Size is {}", cache.size(None));

    tokio::time::sleep(Duration::from_secs(2)).await;
    cache.kill();
    info!("Stats: {}", serde_json::to_string(&cache.stats())?);

    Ok(())
}
