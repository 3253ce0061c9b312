//! Inventory fetcher interface.

use crate::config::cluster_tag_key;
use crate::error::InventoryError;
use crate::models::Subnet;
use async_trait::async_trait;

/// Lists the subnets tagged with a discovery filter.
///
/// A call either returns the complete list or fails. Callers cancel it by
/// dropping the future, so implementations must not leave partial state behind.
#[async_trait]
pub trait InventoryFetcher: Send + Sync {
    async fn fetch(&self, discovery_filter: &str) -> Result<Vec<Subnet>, InventoryError>;
}

#[async_trait]
impl<T: InventoryFetcher + ?Sized> InventoryFetcher for std::sync::Arc<T> {
    async fn fetch(&self, discovery_filter: &str) -> Result<Vec<Subnet>, InventoryError> {
        (**self).fetch(discovery_filter).await
    }
}

/// Tag key scoping the inventory query to `cluster`.
pub fn discovery_filter(cluster: &str) -> String {
    cluster_tag_key(cluster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_filter() {
        assert_eq!(discovery_filter("dev-01"), "kubernetes.io/cluster/dev-01");
    }
}
