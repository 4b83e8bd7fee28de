//! Competition membership: the association of a team with a competition.

use serde::{Deserialize, Serialize};

use super::{CompetitionId, TeamId};

/// A team's enrollment in a competition.
///
/// `group_name` partitions the competition into pools; `None` means the
/// competition has a single implicit group. An empty string is never used
/// as a group key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    /// Competition the team is enrolled in
    pub competition_id: CompetitionId,

    /// The enrolled team
    pub team_id: TeamId,

    /// Pool/group tag, if the competition has groups
    pub group_name: Option<String>,

    /// Previously stored points hint. Never authoritative: the standings
    /// aggregator recomputes points from match results.
    #[serde(default)]
    pub seed_points: u32,
}

impl Membership {
    /// Enroll a team in a competition (no group).
    pub fn new(competition_id: CompetitionId, team_id: TeamId) -> Self {
        Self {
            competition_id,
            team_id,
            group_name: None,
            seed_points: 0,
        }
    }

    /// Builder method to place the team in a group.
    pub fn with_group(mut self, group_name: String) -> Self {
        self.group_name = Some(group_name);
        self
    }

    /// Builder method to carry over a stored points hint.
    pub fn with_seed_points(mut self, points: u32) -> Self {
        self.seed_points = points;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    #[test]
    fn test_membership_creation() {
        let ms = Membership::new(EntityId::from("comp-1"), EntityId::from("team-1"));
        assert!(ms.group_name.is_none());
        assert_eq!(ms.seed_points, 0);
    }

    #[test]
    fn test_membership_with_group() {
        let ms = Membership::new(EntityId::from("comp-1"), EntityId::from("team-1"))
            .with_group("A".to_string());
        assert_eq!(ms.group_name.as_deref(), Some("A"));
    }

    #[test]
    fn test_seed_points_default_on_deserialize() {
        // older records have no seed_points field
        let json = r#"{"competition_id":"c","team_id":"t","group_name":null}"#;
        let ms: Membership = serde_json::from_str(json).unwrap();
        assert_eq!(ms.seed_points, 0);
    }
}
