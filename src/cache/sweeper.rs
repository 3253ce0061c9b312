//! Background eviction of expired cache entries.

use super::TtlCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Start a task purging expired entries of `cache` every `every`.
///
/// Must be called from within a Tokio runtime. The task runs until the
/// returned token is cancelled. A zero `every` starts no task: expired
/// entries are then only dropped when overwritten or purged by hand.
///
/// # Arguments
/// * `cache` - The cache to sweep
/// * `every` - Time between two sweeps
///
/// # Returns
/// A token stopping the task when cancelled
pub fn spawn_sweeper<V>(cache: Arc<TtlCache<V>>, every: Duration) -> CancellationToken
where
    V: Clone + Send + Sync + 'static,
{
    let cancel = CancellationToken::new();
    if every.is_zero() {
        log::info!("Cache sweeper disabled, cleanup interval is zero");
        return cancel;
    }
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        run_sweep_loop(cache, every, cancel_clone).await;
    });

    cancel
}

async fn run_sweep_loop<V: Clone>(
    cache: Arc<TtlCache<V>>,
    every: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // First tick completes immediately
    ticker.tick().await;

    log::info!("Cache sweeper started, interval={}s", every.as_secs());

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                log::info!("Cache sweeper shutting down");
                break;
            }
            _ = ticker.tick() => {
                let evicted = cache.purge_expired();
                if evicted > 0 {
                    log::debug!("Cache sweep evicted {evicted} entries, {} left", cache.len());
                }
            }
        }
    }
}
