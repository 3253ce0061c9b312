//! Domain models for subnet resolution.
//!
//! - [`Subnet`] and [`Tag`] - a subnet as reported by the cloud inventory
//! - [`Constraints`] - caller-supplied narrowing criteria

mod constraints;
mod subnet;

// Re-export public types
pub use constraints::Constraints;
pub use subnet::{Subnet, Tag, NAME_TAG_KEY};
