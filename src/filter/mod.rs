//! Narrowing of candidate subnets.
//!
//! - [`predicate`] - the individual subnet tests
//! - [`chain`] - applying them in order for a set of [`crate::models::Constraints`]

mod chain;
mod predicate;

// Re-export public types and functions
pub use chain::{apply_constraints, filters_for, narrow};
pub use predicate::SubnetFilter;
