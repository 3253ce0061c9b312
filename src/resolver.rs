//! Subnet resolution for a cluster.
//!
//! Cache-or-fetch the cluster's subnets, then narrow them by the caller's
//! [`Constraints`].

use crate::cache::{spawn_sweeper, CacheStats, TtlCache};
use crate::config::ResolverConfig;
use crate::error::{InventoryError, ResolveError};
use crate::filter::apply_constraints;
use crate::inventory::{discovery_filter, InventoryFetcher};
use crate::models::{Constraints, Subnet};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Cache of discovered subnets keyed by cluster name.
pub type SubnetCache = TtlCache<Arc<Vec<Subnet>>>;

/// Resolves the subnets a cluster may place nodes in.
///
/// Concurrent misses for the same cluster each query the inventory; the last
/// one to finish is what stays cached.
pub struct SubnetResolver<F> {
    fetcher: F,
    cache: Arc<SubnetCache>,
    sweeper: CancellationToken,
}

impl<F: InventoryFetcher> SubnetResolver<F> {
    /// Build a resolver with its own cache.
    ///
    /// Must be called from within a Tokio runtime: the cache sweeper is spawned
    /// here and stopped when the resolver is dropped.
    pub fn new(fetcher: F, config: ResolverConfig) -> Self {
        let cache = Arc::new(TtlCache::new(config.cache_ttl));
        Self::with_cache(fetcher, cache, config.cleanup_interval)
    }

    /// Build a resolver around an existing cache, e.g. one shared with another resolver.
    ///
    /// Entries are stored with the cache's own default TTL. Only one of the
    /// resolvers sharing a cache needs a sweeper; pass a zero
    /// `cleanup_interval` to the others.
    ///
    /// # Arguments
    /// * `fetcher` - Inventory queried on a cache miss
    /// * `cache` - Cache keyed by cluster name
    /// * `cleanup_interval` - Sweep period, zero for no sweeper
    pub fn with_cache(fetcher: F, cache: Arc<SubnetCache>, cleanup_interval: Duration) -> Self {
        let sweeper = spawn_sweeper(cache.clone(), cleanup_interval);
        SubnetResolver {
            fetcher,
            cache,
            sweeper,
        }
    }

    /// Subnets of `cluster` that satisfy `constraints`, in inventory order.
    ///
    /// Only a cache miss may suspend. Cancelling `cancel` aborts the inventory
    /// query and yields [`ResolveError::Discovery`]; nothing is cached then.
    pub async fn get(
        &self,
        cancel: &CancellationToken,
        cluster: &str,
        constraints: &Constraints,
    ) -> Result<Vec<Subnet>, ResolveError> {
        let candidates = self.candidates(cancel, cluster).await?;
        Ok(apply_constraints(&candidates, constraints))
    }

    async fn candidates(
        &self,
        cancel: &CancellationToken,
        cluster: &str,
    ) -> Result<Arc<Vec<Subnet>>, ResolveError> {
        if let Some(subnets) = self.cache.get(cluster) {
            log::debug!("cache hit for cluster {cluster}: {} subnets", subnets.len());
            return Ok(subnets);
        }
        log::debug!("cache miss for cluster {cluster}");

        let filter = discovery_filter(cluster);
        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(InventoryError::Cancelled),
            result = self.fetcher.fetch(&filter) => result,
        };
        let subnets = match fetched {
            Ok(subnets) => Arc::new(subnets),
            Err(source) => {
                log::warn!("Failed discovering subnets for cluster {cluster}: {source}");
                return Err(ResolveError::Discovery {
                    cluster: cluster.to_string(),
                    source,
                });
            }
        };

        log::info!(
            "Successfully discovered {} subnets for cluster {cluster}",
            subnets.len()
        );
        self.cache.insert(cluster, subnets.clone());
        Ok(subnets)
    }

    /// Forget the cached subnets of `cluster`, the next `get` refetches.
    pub fn invalidate(&self, cluster: &str) -> bool {
        self.cache.remove(cluster)
    }

    pub fn cache(&self) -> &Arc<SubnetCache> {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl<F> Drop for SubnetResolver<F> {
    fn drop(&mut self) {
        self.sweeper.cancel();
    }
}
