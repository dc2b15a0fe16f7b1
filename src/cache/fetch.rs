//! Read-through helper for shared caches.

use std::future::Future;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::TtlCache;
use crate::clock::Clock;

/// Returns the fresh value under `key`, or awaits `fetch` and caches its result.
///
/// Only successful fetches are stored; an error is returned as-is and the next
/// call fetches again. The lock is not held while `fetch` runs, so two callers
/// missing at once may both fetch; the later write wins.
pub async fn fetch_through<V, C, F, Fut, E>(
    cache: &RwLock<TtlCache<V, C>>,
    key: &str,
    ttl_ms: Option<u64>,
    fetch: F,
) -> Result<V, E>
where
    V: Clone,
    C: Clock,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    {
        let mut guard = cache.write().await;
        if let Some(hit) = guard.get(key) {
            debug!(key, "Cache hit");
            return Ok(hit.clone());
        }
    }

    debug!(key, "Cache miss, fetching");
    let value = fetch().await?;
    cache.write().await.set(key, value.clone(), ttl_ms);
    Ok(value)
}
