//! The store/retrieve capability.
//!
//! Any `Serialize + DeserializeOwned` type opts in with an empty
//! `impl Storable for T {}`. Storing encodes the value's fields as a JSON
//! object; retrieving parses that object and rebuilds a `T` through `T`'s own
//! deserializer, so the result carries every method `T` defines.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{Result, StorableError};
use crate::storage::{FieldPolicy, KeyValueStore, StorageTier, TieredStorage};

/// Store/retrieve contract over a [`TieredStorage`].
///
/// `tier` arguments accept a [`StorageTier`], a raw numeric code
/// (`1` durable, `2` session) or a tier name. The tier is validated before any
/// backend is touched, so a bad tier never reads or writes.
pub trait Storable: Serialize + DeserializeOwned {
    /// Serialize `self` and write it under `key` in `tier`, replacing any
    /// prior value.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an unrecognized tier or an empty key
    /// - `Serialization` if the value does not encode to a JSON object
    /// - `Storage` if the backend write fails
    fn store<D, S, T>(&self, storage: &mut TieredStorage<D, S>, key: &str, tier: T) -> Result<()>
    where
        D: KeyValueStore,
        S: KeyValueStore,
        T: TryInto<StorageTier>,
        StorableError: From<T::Error>,
    {
        let tier: StorageTier = tier.try_into()?;
        validate_key(key)?;
        let text = encode(self)?;
        let bytes = text.len();
        storage.tier_mut(tier).set(key, text)?;
        debug!(
            key,
            tier = %tier,
            bytes,
            type_name = std::any::type_name::<Self>(),
            "stored value"
        );
        Ok(())
    }

    /// Read `key` from `tier` and rebuild a `Self` from it.
    ///
    /// The stored fields must match what `Self` encodes to: unknown fields and
    /// absent fields are both rejected, including `Option` fields that would
    /// otherwise come back as `None`. See [`Storable::retrieve_with`] to choose
    /// another [`FieldPolicy`].
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an unrecognized tier or an empty key
    /// - `NotFound` when nothing is stored at `(key, tier)`
    /// - `Deserialization` when the text is not a JSON object or does not
    ///   match the fields of `Self`
    fn retrieve<D, S, T>(storage: &TieredStorage<D, S>, key: &str, tier: T) -> Result<Self>
    where
        D: KeyValueStore,
        S: KeyValueStore,
        T: TryInto<StorageTier>,
        StorableError: From<T::Error>,
    {
        Self::retrieve_with(storage, key, tier, FieldPolicy::default())
    }

    /// Like [`Storable::retrieve`], with an explicit [`FieldPolicy`].
    ///
    /// The storage layer never fills a field itself. Under
    /// [`FieldPolicy::Ignore`] an absent field is left to `Self`'s own serde
    /// handling (`#[serde(default)]`, `Option`), and fails if there is none.
    fn retrieve_with<D, S, T>(
        storage: &TieredStorage<D, S>,
        key: &str,
        tier: T,
        policy: FieldPolicy,
    ) -> Result<Self>
    where
        D: KeyValueStore,
        S: KeyValueStore,
        T: TryInto<StorageTier>,
        StorableError: From<T::Error>,
    {
        let tier: StorageTier = tier.try_into()?;
        validate_key(key)?;
        let text = storage.tier(tier).get(key)?.ok_or_else(|| {
            StorableError::NotFound(format!("key \"{}\" in {} storage", key, tier))
        })?;
        trace!(key, tier = %tier, bytes = text.len(), "read stored text");

        let value = decode(&text, policy)?;
        debug!(
            key,
            tier = %tier,
            type_name = std::any::type_name::<Self>(),
            "retrieved value"
        );
        Ok(value)
    }

    /// Whether anything is stored at `(key, tier)`.
    fn exists<D, S, T>(storage: &TieredStorage<D, S>, key: &str, tier: T) -> Result<bool>
    where
        D: KeyValueStore,
        S: KeyValueStore,
        T: TryInto<StorageTier>,
        StorableError: From<T::Error>,
    {
        let tier: StorageTier = tier.try_into()?;
        validate_key(key)?;
        Ok(storage.tier(tier).get(key)?.is_some())
    }

    /// Delete the record at `(key, tier)`, returning whether it existed.
    fn remove<D, S, T>(storage: &mut TieredStorage<D, S>, key: &str, tier: T) -> Result<bool>
    where
        D: KeyValueStore,
        S: KeyValueStore,
        T: TryInto<StorageTier>,
        StorableError: From<T::Error>,
    {
        let tier: StorageTier = tier.try_into()?;
        validate_key(key)?;
        let existed = storage.tier_mut(tier).remove(key)?;
        debug!(key, tier = %tier, existed, "removed value");
        Ok(existed)
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StorableError::InvalidArgument(
            "Storage key must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Encode `value` as a compact JSON object.
pub(crate) fn encode<V: Serialize + ?Sized>(value: &V) -> Result<String> {
    let json = serde_json::to_value(value)
        .map_err(|e| StorableError::Serialization(e.to_string()))?;
    if !json.is_object() {
        return Err(StorableError::Serialization(format!(
            "Stored values must encode to a JSON object, got {}",
            json_kind(&json)
        )));
    }
    serde_json::to_string(&json).map_err(|e| StorableError::Serialization(e.to_string()))
}

/// Parse stored text into a field map and restore `V` from it.
pub(crate) fn decode<V>(text: &str, policy: FieldPolicy) -> Result<V>
where
    V: Serialize + DeserializeOwned,
{
    let json: Value = serde_json::from_str(text)
        .map_err(|e| StorableError::Deserialization(format!("Malformed stored text: {}", e)))?;
    let Value::Object(fields) = &json else {
        return Err(StorableError::Deserialization(format!(
            "Expected a JSON object, found {}",
            json_kind(&json)
        )));
    };

    let restored = V::deserialize(&json)
        .map_err(|e| StorableError::Deserialization(e.to_string()))?;

    if policy == FieldPolicy::Reject {
        let mismatch = field_mismatch(fields, &restored)?;
        if !mismatch.is_empty() {
            return Err(StorableError::Deserialization(mismatch.to_string()));
        }
    }
    Ok(restored)
}

/// Difference between the stored field names and the names the restored
/// value produces when encoded again.
#[derive(Debug)]
struct FieldMismatch {
    /// Stored but not produced by re-encoding.
    extra: Vec<String>,
    /// Produced by re-encoding but absent from the stored text.
    missing: Vec<String>,
}

impl FieldMismatch {
    fn is_empty(&self) -> bool {
        self.extra.is_empty() && self.missing.is_empty()
    }
}

impl std::fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing field(s): {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!(
                "stored field(s) not produced by re-encoding: {}",
                self.extra.join(", ")
            ));
        }
        write!(f, "Stored fields do not match the type ({})", parts.join("; "))
    }
}

fn field_mismatch<V: Serialize>(
    stored: &Map<String, Value>,
    restored: &V,
) -> Result<FieldMismatch> {
    let encoded = match serde_json::to_value(restored) {
        Ok(Value::Object(map)) => map,
        Ok(_) => Map::new(),
        Err(e) => return Err(StorableError::Deserialization(e.to_string())),
    };
    Ok(FieldMismatch {
        extra: stored
            .keys()
            .filter(|name| !encoded.contains_key(name.as_str()))
            .cloned()
            .collect(),
        missing: encoded
            .keys()
            .filter(|name| !stored.contains_key(name.as_str()))
            .cloned()
            .collect(),
    })
}
