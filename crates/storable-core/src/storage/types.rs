//! Core data types for the storage layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StorableError;

/// One of the two storage scopes.
///
/// Tier and key together form the whole identity of a stored record; the same
/// key in the other tier is a different record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTier {
    /// Persists with no expiration.
    Durable,
    /// Persists only for the lifetime of the host session.
    Session,
}

impl StorageTier {
    /// Numeric code of the durable tier.
    pub const DURABLE: u8 = 1;
    /// Numeric code of the session tier.
    pub const SESSION: u8 = 2;

    /// Both tiers, durable first.
    pub const ALL: [StorageTier; 2] = [StorageTier::Durable, StorageTier::Session];

    /// Parse a numeric tier code.
    ///
    /// # Errors
    ///
    /// Returns `StorableError::InvalidArgument` for anything other than
    /// [`StorageTier::DURABLE`] or [`StorageTier::SESSION`].
    pub fn from_code(code: u8) -> Result<Self, StorableError> {
        match code {
            Self::DURABLE => Ok(StorageTier::Durable),
            Self::SESSION => Ok(StorageTier::Session),
            other => Err(StorableError::InvalidArgument(format!(
                "Storage tier must be {} (durable) or {} (session), got {}",
                Self::DURABLE,
                Self::SESSION,
                other
            ))),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            StorageTier::Durable => Self::DURABLE,
            StorageTier::Session => Self::SESSION,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StorageTier::Durable => "durable",
            StorageTier::Session => "session",
        }
    }
}

impl fmt::Display for StorageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for StorageTier {
    type Error = StorableError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl FromStr for StorageTier {
    type Err = StorableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "durable" | "local" | "1" => Ok(StorageTier::Durable),
            "session" | "2" => Ok(StorageTier::Session),
            other => Err(StorableError::InvalidArgument(format!(
                "Unknown storage tier \"{}\" (expected durable or session)",
                other
            ))),
        }
    }
}

impl TryFrom<&str> for StorageTier {
    type Error = StorableError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// How strictly retrieval matches stored fields against the target type.
///
/// The comparison is against the fields the restored value produces when it
/// is encoded again, not against the type's declaration. A field the type
/// skips on serialization (`skip_serializing_if`) or reads under an `alias`
/// therefore counts as "not produced by re-encoding" when it shows up in the
/// stored text; such types should retrieve with [`FieldPolicy::Ignore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Stored and re-encoded field names must be identical. Unknown fields
    /// and absent fields both fail, even when the type could fill the gap
    /// with `#[serde(default)]` or an `Option`.
    #[default]
    Reject,
    /// Drop unknown fields. Absent fields are left to the type's own serde
    /// defaults; the storage layer never fills them.
    Ignore,
}
