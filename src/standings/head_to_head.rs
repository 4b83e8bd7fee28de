//! Head-to-head series statistics between two teams.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::RECENT_WINDOW;
use crate::models::{Match, Outcome, Team, TeamId};

/// Series statistics for an unordered pair of teams in one competition.
///
/// `team1`/`team2` follow the caller's argument order and are resolved
/// from the team collection independently of shared history, so a pairing
/// that never met still gets labeled. `None` only when the id is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub team1: Option<Team>,
    pub team2: Option<Team>,
    pub total_matches: u32,
    pub team1_wins: u32,
    pub team2_wins: u32,
    pub draws: u32,
    pub team1_goals: u32,
    pub team2_goals: u32,

    /// Most recent meetings, newest first, at most 5
    pub last_matches: Vec<Match>,
}

/// Compute the head-to-head record between `team1_id` and `team2_id`.
///
/// Scores are attributed per match by the side each team actually
/// occupied; home and away vary meeting to meeting.
pub fn compute_head_to_head(
    teams: &[Team],
    matches: &[Match],
    team1_id: &TeamId,
    team2_id: &TeamId,
) -> HeadToHead {
    let mut series: Vec<&Match> = matches
        .iter()
        .filter(|m| m.is_finished() && m.is_between(team1_id, team2_id))
        .collect();
    series.sort_by_key(|m| Reverse(m.kickoff));

    let mut result = HeadToHead {
        team1: teams.iter().find(|t| t.id == *team1_id).cloned(),
        team2: teams.iter().find(|t| t.id == *team2_id).cloned(),
        total_matches: series.len() as u32,
        team1_wins: 0,
        team2_wins: 0,
        draws: 0,
        team1_goals: 0,
        team2_goals: 0,
        last_matches: Vec::new(),
    };

    for m in &series {
        let Some(side1) = m.side_of(team1_id) else {
            continue;
        };
        result.team1_goals += m.score_of(side1);
        result.team2_goals += m.score_of(side1.opposite());
        match m.outcome_for(team1_id) {
            Some(Outcome::Win) => result.team1_wins += 1,
            Some(Outcome::Loss) => result.team2_wins += 1,
            Some(Outcome::Draw) => result.draws += 1,
            None => {}
        }
    }

    // Already newest-first; this is a head slice, not a re-sort.
    result.last_matches = series
        .into_iter()
        .take(RECENT_WINDOW)
        .cloned()
        .collect();
    result
}
