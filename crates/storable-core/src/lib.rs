//! # Storable Core
//!
//! Core library for Storable - typed persistence of values into a two-tier
//! string key-value store.
//!
//! A value is serialized to JSON and written under a key in either the durable
//! tier (no expiration) or the session tier (lives as long as the host
//! session). Retrieval parses the text back and rebuilds a value of the
//! declared type, so callers get a fully usable instance rather than an
//! untyped data bag.
//!
//! ## Architecture
//!
//! - **storage**: Key-value boundary trait, tier types and backends
//! - **storable**: The store/retrieve capability and type restoration
//! - **wrappers**: Record and sequence wrappers for bare JSON payloads
//! - **fs**: Atomic file replacement used by the file backend
//!
//! ## Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use storable_core::storage::{StorageTier, TieredStorage};
//! use storable_core::Storable;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Person {
//!     name: String,
//! }
//!
//! impl Person {
//!     fn greeting(&self) -> String {
//!         format!("Hello, {}", self.name)
//!     }
//! }
//!
//! impl Storable for Person {}
//!
//! let mut storage = TieredStorage::in_memory();
//! Person { name: "Peter".into() }
//!     .store(&mut storage, "last_client", StorageTier::Durable)
//!     .unwrap();
//!
//! let client = Person::retrieve(&storage, "last_client", StorageTier::Durable).unwrap();
//! assert_eq!(client.greeting(), "Hello, Peter");
//! ```

pub mod error;
pub mod fs;
pub mod storable;
pub mod storage;
pub mod wrappers;

pub use error::{Result, StorableError};
pub use storable::Storable;
pub use storage::{FieldPolicy, KeyValueStore, StorageTier, TieredStorage};
pub use wrappers::{StorableRecord, StorableSequence};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
