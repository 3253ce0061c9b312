//! Cloud inventory access.
//!
//! - [`fetcher`] - the [`InventoryFetcher`] seam the resolver consumes
//! - [`cli`] - command execution for the cloud CLI
//! - [`aws`] - `describe-subnets` based fetcher

mod aws;
mod cli;
mod fetcher;

// Re-export public types and functions
pub use aws::{parse_describe_subnets, AwsCliFetcher, DescribeSubnetsOutput, DEFAULT_COMMAND};
pub use cli::{run, split_and_strip};
pub use fetcher::{discovery_filter, InventoryFetcher};
