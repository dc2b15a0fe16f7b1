//! TTL Cleanup Task
//!
//! Optional background sweep that drops expired entries nobody reads again.
//! Expiry is still enforced on read; the sweep only bounds memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::clock::Clock;

/// Spawns a task that calls [`TtlCache::purge_expired`] every `interval_ms`.
///
/// Returns the task handle so shutdown can abort it.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(TtlCache::<serde_json::Value>::new()));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 1_000);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V, C>(cache: Arc<RwLock<TtlCache<V, C>>>, interval_ms: u64) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
    C: Clock + 'static,
{
    let interval = Duration::from_millis(interval_ms);

    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {}ms", interval_ms);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.purge_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn shared_cache() -> (Arc<RwLock<TtlCache<String, ManualClock>>>, ManualClock) {
        let clock = ManualClock::new(0);
        let cache = TtlCache::with_clock(60_000, clock.clone());
        (Arc::new(RwLock::new(cache)), clock)
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let (cache, clock) = shared_cache();

        cache
            .write()
            .await
            .set("expire_soon", "value".to_string(), Some(10));
        clock.advance(10);

        let handle = spawn_cleanup_task(cache.clone(), 20);
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Removed by the sweep, not by a read
        assert!(cache.read().await.is_empty());
        assert_eq!(cache.read().await.stats().expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let (cache, _clock) = shared_cache();

        cache
            .write()
            .await
            .set("long_lived", "value".to_string(), Some(3_600_000));

        let handle = spawn_cleanup_task(cache.clone(), 20);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.write().await.get("long_lived").cloned(), Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let (cache, _clock) = shared_cache();

        let handle = spawn_cleanup_task(cache, 1_000);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
