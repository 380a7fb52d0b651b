//! Handlers that read and write stored values.

mod list;
mod remove;
mod retrieve;
mod store;

pub use list::handle_list;
pub use remove::handle_remove;
pub use retrieve::handle_retrieve;
pub use store::handle_store;

use storable_core::StorageTier;

/// Parse a `--tier` argument, accepting names and numeric codes.
fn parse_tier(value: &str) -> storable_core::Result<StorageTier> {
    value.parse()
}
