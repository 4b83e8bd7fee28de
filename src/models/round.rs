//! Round model.

use serde::{Deserialize, Serialize};

use super::{CompetitionId, EntityId, RoundId};

/// A round (matchday) within a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Unique identifier (derived from competition, name and number)
    pub id: RoundId,

    /// Competition this round belongs to
    pub competition_id: CompetitionId,

    /// Display name (e.g. "Rodada 12", "Quarter-finals")
    pub name: String,

    /// Sequential number used for ordering
    pub round_number: u32,

    /// Phase label for knockout stages, if any
    pub phase: Option<String>,
}

impl Round {
    /// Create a new Round with auto-generated ID.
    pub fn new(competition_id: CompetitionId, name: String, round_number: u32) -> Self {
        let id = EntityId::derive(&[competition_id.as_str(), &name, &round_number.to_string()]);
        Self {
            id,
            competition_id,
            name,
            round_number,
            phase: None,
        }
    }

    /// Builder method to set the phase label.
    pub fn with_phase(mut self, phase: String) -> Self {
        self.phase = Some(phase);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_creation() {
        let round = Round::new(EntityId::from("comp"), "Round 3".to_string(), 3);
        assert_eq!(round.round_number, 3);
        assert!(round.phase.is_none());
        assert!(!round.id.as_str().is_empty());
    }

    #[test]
    fn test_round_with_phase() {
        let round = Round::new(EntityId::from("comp"), "Semifinal".to_string(), 20)
            .with_phase("knockout".to_string());
        assert_eq!(round.phase.as_deref(), Some("knockout"));
    }

    #[test]
    fn test_round_id_deterministic() {
        let a = Round::new(EntityId::from("comp"), "Round 1".to_string(), 1);
        let b = Round::new(EntityId::from("comp"), "Round 1".to_string(), 1);
        assert_eq!(a.id, b.id);
    }
}
