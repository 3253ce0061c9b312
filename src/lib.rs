//! Resolve the subnets a cluster may place new nodes in.
//!
//! Subnets tagged for a cluster are discovered through the cloud inventory,
//! cached per cluster for a TTL, and narrowed by name, tag key and zone.

pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod inventory;
pub mod models;
pub mod output;
mod resolver;

pub use config::ResolverConfig;
pub use error::{InventoryError, ResolveError};
pub use models::{Constraints, Subnet, Tag};
pub use resolver::{SubnetCache, SubnetResolver};
