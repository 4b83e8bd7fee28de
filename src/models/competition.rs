//! Competition model.

use serde::{Deserialize, Serialize};

use super::{CompetitionId, EntityId};

/// A competition (league, cup, tournament edition).
///
/// Used only to scope queries; the slug is what external callers resolve
/// URLs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    /// Unique identifier (derived from the slug)
    pub id: CompetitionId,

    /// Display name
    pub name: String,

    /// URL-safe identifier
    pub slug: String,
}

impl Competition {
    /// Create a new Competition with auto-generated ID.
    pub fn new(name: String, slug: String) -> Self {
        let id = EntityId::derive(&[&slug]);
        Self { id, name, slug }
    }
}
