//! Team model.

use serde::{Deserialize, Serialize};

use super::{EntityId, TeamId};

/// A team as known to the competition store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier (derived from the team name)
    pub id: TeamId,

    /// Display name
    pub name: String,

    /// Logo reference (URL or object-storage key)
    pub logo_url: Option<String>,
}

impl Team {
    /// Create a new Team with auto-generated ID.
    pub fn new(name: String) -> Self {
        let id = EntityId::derive(&[&name]);
        Self {
            id,
            name,
            logo_url: None,
        }
    }

    /// Builder method to set the logo reference.
    pub fn with_logo(mut self, logo_url: String) -> Self {
        self.logo_url = Some(logo_url);
        self
    }
}
