//! Storage abstraction for Storable.
//!
//! This module defines the `KeyValueStore` boundary, the tier types, and the
//! backends that implement the boundary.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic:
//! - `MemoryStore`: in-process map (session tier, tests)
//! - `FileStore`: JSON file with atomic rewrites (durable tier)
//!
//! `TieredStorage` pairs one backend per tier and is the handle every
//! store/retrieve call receives.

pub mod file;
pub mod memory;
pub mod tiered;
pub mod traits;
pub mod types;

// Re-export public types
pub use file::FileStore;
pub use memory::MemoryStore;
pub use tiered::TieredStorage;
pub use traits::KeyValueStore;
pub use types::{FieldPolicy, StorageTier};
