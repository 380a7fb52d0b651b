//! Wrappers that let bare JSON payloads use the store/retrieve contract.
//!
//! A bare array or map does not encode to a field map, so it cannot be stored
//! directly. Wrapping it under a single `value` field fixes that. The payload
//! stays untyped; callers that want typed elements convert them after
//! retrieval.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::storable::Storable;

/// A bare key-value record held under `value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorableRecord {
    pub value: Map<String, Value>,
}

impl StorableRecord {
    pub fn new(value: Map<String, Value>) -> Self {
        Self { value }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.value
    }
}

impl From<Map<String, Value>> for StorableRecord {
    fn from(value: Map<String, Value>) -> Self {
        Self::new(value)
    }
}

impl Storable for StorableRecord {}

/// A bare ordered sequence held under `value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorableSequence {
    pub value: Vec<Value>,
}

impl StorableSequence {
    pub fn new(value: Vec<Value>) -> Self {
        Self { value }
    }

    /// Wrap any serializable items.
    ///
    /// # Errors
    ///
    /// Returns `StorableError::Serialization` if an item cannot be encoded.
    pub fn from_items<I, T>(items: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let value = items
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| crate::StorableError::Serialization(e.to_string()))?;
        Ok(Self { value })
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.value
    }
}

impl From<Vec<Value>> for StorableSequence {
    fn from(value: Vec<Value>) -> Self {
        Self::new(value)
    }
}

impl Storable for StorableSequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, StorageTier, TieredStorage};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
    }

    #[test]
    fn test_sequence_round_trip() {
        let mut storage = TieredStorage::in_memory();
        StorableSequence::new(vec![json!(1), json!(2), json!(3)])
            .store(&mut storage, "k", StorageTier::Durable)
            .unwrap();

        let restored = StorableSequence::retrieve(&storage, "k", StorageTier::Durable).unwrap();
        assert_eq!(restored.value, vec![json!(1), json!(2), json!(3)]);
        assert_eq!(
            storage.durable().get("k").unwrap().as_deref(),
            Some(r#"{"value":[1,2,3]}"#)
        );
    }

    #[test]
    fn test_record_round_trip() {
        let mut storage = TieredStorage::in_memory();
        let Value::Object(map) = json!({"theme": "dark", "sizes": [10, 12]}) else {
            unreachable!()
        };
        StorableRecord::from(map.clone())
            .store(&mut storage, "prefs", StorageTier::Session)
            .unwrap();

        let restored = StorableRecord::retrieve(&storage, "prefs", StorageTier::Session).unwrap();
        assert_eq!(restored.into_inner(), map);
    }

    #[test]
    fn test_sequence_elements_stay_untyped() {
        let mut storage = TieredStorage::in_memory();
        let clients = StorableSequence::from_items([
            Person { name: "Peter".into() },
            Person { name: "Jane".into() },
        ])
        .unwrap();
        clients
            .store(&mut storage, "clients", StorageTier::Durable)
            .unwrap();

        let restored = StorableSequence::retrieve(&storage, "clients", StorageTier::Durable)
            .unwrap()
            .into_inner();
        assert_eq!(restored[0], json!({"name": "Peter"}));

        let typed: Vec<Person> = restored
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(typed[1], Person { name: "Jane".into() });
    }

    #[test]
    fn test_wrapper_rejects_foreign_shape() {
        let mut storage = TieredStorage::in_memory();
        StorableRecord::default()
            .store(&mut storage, "k", StorageTier::Durable)
            .unwrap();

        let err = StorableSequence::retrieve(&storage, "k", StorageTier::Durable).unwrap_err();
        assert!(matches!(err, crate::StorableError::Deserialization(_)));
    }
}
