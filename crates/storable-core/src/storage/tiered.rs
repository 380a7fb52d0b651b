//! Two independent key spaces, one per storage tier.

use std::path::PathBuf;

use crate::error::Result;
use crate::storage::file::FileStore;
use crate::storage::memory::MemoryStore;
use crate::storage::traits::KeyValueStore;
use crate::storage::types::StorageTier;

/// Durable and session backends addressed by [`StorageTier`].
///
/// The two backends never share keys: a write to one tier is invisible to
/// the other.
#[derive(Debug, Clone, Default)]
pub struct TieredStorage<D, S> {
    durable: D,
    session: S,
}

impl<D, S> TieredStorage<D, S>
where
    D: KeyValueStore,
    S: KeyValueStore,
{
    pub fn new(durable: D, session: S) -> Self {
        Self { durable, session }
    }

    /// Backend for `tier`.
    pub fn tier(&self, tier: StorageTier) -> &dyn KeyValueStore {
        match tier {
            StorageTier::Durable => &self.durable,
            StorageTier::Session => &self.session,
        }
    }

    /// Mutable backend for `tier`.
    pub fn tier_mut(&mut self, tier: StorageTier) -> &mut dyn KeyValueStore {
        match tier {
            StorageTier::Durable => &mut self.durable,
            StorageTier::Session => &mut self.session,
        }
    }

    pub fn durable(&self) -> &D {
        &self.durable
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Split back into the two backends.
    pub fn into_parts(self) -> (D, S) {
        (self.durable, self.session)
    }
}

impl TieredStorage<MemoryStore, MemoryStore> {
    /// Both tiers held in memory.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), MemoryStore::new())
    }
}

impl TieredStorage<FileStore, FileStore> {
    /// Both tiers backed by JSON files.
    ///
    /// # Errors
    ///
    /// Returns `StorableError::Storage` if either existing file is unreadable.
    pub fn open_files(durable: impl Into<PathBuf>, session: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(FileStore::open(durable)?, FileStore::open(session)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_isolated() {
        let mut storage = TieredStorage::in_memory();
        storage
            .tier_mut(StorageTier::Durable)
            .set("k", "durable".into())
            .unwrap();

        assert_eq!(
            storage.tier(StorageTier::Durable).get("k").unwrap().as_deref(),
            Some("durable")
        );
        assert_eq!(storage.tier(StorageTier::Session).get("k").unwrap(), None);
        assert!(storage.session().is_empty());
        assert_eq!(storage.durable().len(), 1);
    }

    #[test]
    fn test_open_files_uses_separate_paths() {
        let dir = tempfile::tempdir().unwrap();
        let durable = dir.path().join("durable.json");
        let session = dir.path().join("session.json");

        let mut storage = TieredStorage::open_files(&durable, &session).unwrap();
        storage
            .tier_mut(StorageTier::Session)
            .set("k", "{}".into())
            .unwrap();

        let (d, s) = storage.into_parts();
        assert_eq!(d.path(), durable.as_path());
        assert!(!durable.exists());
        assert_eq!(s.path(), session.as_path());
        assert!(session.exists());
    }
}
