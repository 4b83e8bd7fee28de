//! Match model and per-team attribution helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CompetitionId, EntityId, MatchId, RoundId, TeamId};

/// Lifecycle status of a match. Only `Finished` matches count toward
/// statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
}

/// Which side a team occupied in a given match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// A finished match's result from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Letter used in form strings.
    pub fn letter(self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }
}

/// A match between two teams in a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier (derived from competition, teams and kickoff)
    pub id: MatchId,

    /// Competition this match belongs to
    pub competition_id: CompetitionId,

    /// Home team
    pub home_team_id: TeamId,

    /// Away team
    pub away_team_id: TeamId,

    /// Lifecycle status
    pub status: MatchStatus,

    /// Scheduled kickoff date/time
    pub kickoff: DateTime<Utc>,

    /// Home goals, meaningful only once finished
    pub home_score: Option<u32>,

    /// Away goals, meaningful only once finished
    pub away_score: Option<u32>,

    /// Pool/group tag; must agree with the membership group semantics
    pub group_name: Option<String>,

    /// Round this match is part of
    pub round_id: Option<RoundId>,

    /// Stadium reference
    pub stadium: Option<String>,
}

impl Match {
    /// Create a scheduled match with auto-generated ID.
    pub fn new(
        competition_id: CompetitionId,
        home_team_id: TeamId,
        away_team_id: TeamId,
        kickoff: DateTime<Utc>,
    ) -> Self {
        let id = EntityId::derive(&[
            competition_id.as_str(),
            home_team_id.as_str(),
            away_team_id.as_str(),
            &kickoff.to_rfc3339(),
        ]);

        Self {
            id,
            competition_id,
            home_team_id,
            away_team_id,
            status: MatchStatus::Scheduled,
            kickoff,
            home_score: None,
            away_score: None,
            group_name: None,
            round_id: None,
            stadium: None,
        }
    }

    /// Builder method to tag the match with a group.
    pub fn with_group(mut self, group_name: String) -> Self {
        self.group_name = Some(group_name);
        self
    }

    /// Builder method to attach the match to a round.
    pub fn with_round(mut self, round_id: RoundId) -> Self {
        self.round_id = Some(round_id);
        self
    }

    /// Builder method to set the stadium.
    pub fn with_stadium(mut self, stadium: String) -> Self {
        self.stadium = Some(stadium);
        self
    }

    /// Builder method to record the final score and mark the match finished.
    pub fn finished(mut self, home_score: u32, away_score: u32) -> Self {
        self.status = MatchStatus::Finished;
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Whether the given team played in this match, on either side.
    pub fn involves(&self, team_id: &TeamId) -> bool {
        self.home_team_id == *team_id || self.away_team_id == *team_id
    }

    /// Whether this match was contested by the unordered pair `{a, b}`.
    pub fn is_between(&self, a: &TeamId, b: &TeamId) -> bool {
        (self.home_team_id == *a && self.away_team_id == *b)
            || (self.home_team_id == *b && self.away_team_id == *a)
    }

    /// The side the team occupied, or `None` if it did not play.
    pub fn side_of(&self, team_id: &TeamId) -> Option<Side> {
        if self.home_team_id == *team_id {
            Some(Side::Home)
        } else if self.away_team_id == *team_id {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Goals scored by the given side. Absent scores read as 0.
    pub fn score_of(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score.unwrap_or(0),
            Side::Away => self.away_score.unwrap_or(0),
        }
    }

    /// Result from the team's point of view. `None` unless the match is
    /// finished and the team played in it.
    pub fn outcome_for(&self, team_id: &TeamId) -> Option<Outcome> {
        if !self.is_finished() {
            return None;
        }
        let side = self.side_of(team_id)?;
        let scored = self.score_of(side);
        let conceded = self.score_of(side.opposite());
        Some(match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }
}
