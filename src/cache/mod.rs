//! In-memory cache of discovered subnets.
//!
//! - [`store`] - keyed store whose entries expire after a TTL
//! - [`sweeper`] - background task evicting expired entries

mod store;
mod sweeper;

// Re-export public types and functions
pub use store::{CacheStats, TtlCache};
pub use sweeper::spawn_sweeper;
