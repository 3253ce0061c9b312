//! Terminal output utilities.

use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field, quotes included
///
/// # Returns
/// A quoted, right-aligned string; values wider than `width` are not truncated
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Highlighted one-line section header.
pub fn banner(title: &str, detail: &str) -> String {
    format!("#{}# {detail}", title.on_blue())
}
