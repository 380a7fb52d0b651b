//! Output formatting helpers for the CLI.
//!
//! Stored values are printed as JSON; key listings as a table on a terminal
//! and as plain space-separated rows otherwise.

mod json;
mod text;

// Re-export public API
pub use json::{listing_json, print_value};
pub use text::{describe_stored, print_listing, ListingRow};
