use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::json;
use storable_core::storage::{FileStore, KeyValueStore, MemoryStore, StorageTier, TieredStorage};
use storable_core::{Storable, StorableError, StorableSequence};

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("{}_{}_{}", prefix, std::process::id(), nanos));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Client {
    name: String,
    visits: u32,
}

impl Client {
    fn record_visit(&mut self) {
        self.visits += 1;
    }
}

impl Storable for Client {}

#[test]
fn test_durable_file_survives_reopen() {
    let dir = TempDir::new("storable_reopen");
    let durable = dir.path.join("durable.json");
    let session = dir.path.join("session.json");

    let mut storage =
        TieredStorage::open_files(&durable, &session).expect("open should succeed");
    Client {
        name: "Peter".into(),
        visits: 1,
    }
    .store(&mut storage, "last_client", StorageTier::Durable)
    .expect("store should succeed");
    drop(storage);

    let storage = TieredStorage::open_files(&durable, &session).expect("reopen should succeed");
    let mut client =
        Client::retrieve(&storage, "last_client", StorageTier::Durable).expect("retrieve");
    client.record_visit();
    assert_eq!(client.visits, 2);
    assert!(Client::retrieve(&storage, "last_client", StorageTier::Session)
        .expect_err("session tier should be empty")
        .is_not_found());
}

#[test]
fn test_session_tier_can_live_in_memory() {
    let dir = TempDir::new("storable_mixed");
    let durable = FileStore::open(dir.path.join("durable.json")).expect("open should succeed");
    let mut storage = TieredStorage::new(durable, MemoryStore::new());

    StorableSequence::new(vec![json!(1), json!(2), json!(3)])
        .store(&mut storage, "ids", StorageTier::Session)
        .expect("store should succeed");

    let ids = StorableSequence::retrieve(&storage, "ids", StorageTier::Session)
        .expect("retrieve should succeed");
    assert_eq!(ids.value, vec![json!(1), json!(2), json!(3)]);
    assert!(storage.durable().keys().expect("keys").is_empty());
    assert!(!storage.durable().path().exists());
}

#[test]
fn test_hand_edited_file_is_deserialization_error() {
    let dir = TempDir::new("storable_edited");
    let durable = dir.path.join("durable.json");
    fs::write(&durable, r#"{"last_client": "{\"name\": \"Peter\""}"#).expect("write");

    let storage = TieredStorage::open_files(&durable, dir.path.join("session.json"))
        .expect("open should succeed");
    let err = Client::retrieve(&storage, "last_client", StorageTier::Durable)
        .expect_err("truncated text should fail");
    assert!(matches!(err, StorableError::Deserialization(_)));
}
