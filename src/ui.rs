//! Terminal presentation for diagnostics.
//!
//! Everything here writes to stderr; stdout is reserved for the version
//! string itself.

use console::style;

use crate::advisory::Advisory;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a single advisory line in yellow.
pub fn display_advisory(advisory: &Advisory) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), advisory);
}
