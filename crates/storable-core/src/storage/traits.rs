//! Key-value boundary trait definition.
//!
//! The `KeyValueStore` trait is the only thing the storable capability needs
//! from its host: a string-keyed, string-valued map. Backends are injected
//! explicitly, which keeps test doubles trivial and avoids ambient globals.

use crate::error::Result;

/// A string-keyed, string-valued store backing one storage tier.
///
/// Implementations must ensure:
/// - `set` replaces any prior value under the same key
/// - `get` is non-destructive
/// - Keys are compared byte-for-byte
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(text))` if present, `Ok(None)` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorableError::Storage` if the backend cannot persist the write.
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Remove `key`, returning whether it existed.
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// All keys currently present, in sorted order.
    fn keys(&self) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &mut dyn KeyValueStore) {}
    }
}
