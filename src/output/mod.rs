//! Output formatting for resolved subnets.
//!
//! - [`csv`] - CSV rows for resolved subnets
//! - [`terminal`] - field padding and banners

mod csv;
mod terminal;

pub use csv::{format_subnet_row, print_subnets, CSV_HEADER};
pub use terminal::{banner, format_field};
