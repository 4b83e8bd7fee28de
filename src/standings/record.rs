//! Win/draw/loss record calculation.

use serde::{Deserialize, Serialize};

use crate::models::{Match, Outcome, TeamId};

/// Aggregate record of a team over a set of matches.
///
/// Points are not stored; [`TeamRecord::points`] derives them so every
/// call site uses the same arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

impl TeamRecord {
    /// League points: 3 per win, 1 per draw.
    pub fn points(&self) -> u32 {
        3 * self.won + self.drawn
    }

    /// Fold one match into the record from the team's point of view.
    ///
    /// Matches that are not finished, or that the team did not play in,
    /// are ignored.
    pub fn apply(&mut self, m: &Match, team_id: &TeamId) {
        let Some(outcome) = m.outcome_for(team_id) else {
            return;
        };
        let Some(side) = m.side_of(team_id) else {
            return;
        };
        let scored = m.score_of(side);
        let conceded = m.score_of(side.opposite());

        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_difference += scored as i32 - conceded as i32;
        match outcome {
            Outcome::Win => self.won += 1,
            Outcome::Draw => self.drawn += 1,
            Outcome::Loss => self.lost += 1,
        }
    }
}

/// Compute a team's record over a mixed set of home and away matches.
pub fn compute_record(matches: &[Match], team_id: &TeamId) -> TeamRecord {
    let mut record = TeamRecord::default();
    for m in matches {
        record.apply(m, team_id);
    }
    record
}
