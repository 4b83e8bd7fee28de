//! Deterministic entity IDs derived from content hashes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A stable entity ID derived from the fields that identify the entity.
///
/// The same input fields always produce the same ID, so re-importing a
/// snapshot never duplicates teams, rounds, or matches.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap an existing ID string.
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Derive an ID from identifying fields.
    ///
    /// SHA-256 over the `|`-joined fields, truncated to 16 hex chars.
    pub fn derive(fields: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                hasher.update(b"|");
            }
            hasher.update(field.as_bytes());
        }
        let digest = hex::encode(hasher.finalize());
        Self(digest[..16].to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Type alias for team IDs
pub type TeamId = EntityId;

/// Type alias for competition IDs
pub type CompetitionId = EntityId;

/// Type alias for match IDs
pub type MatchId = EntityId;

/// Type alias for round IDs
pub type RoundId = EntityId;
