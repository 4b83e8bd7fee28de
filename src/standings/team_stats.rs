//! Single-team statistics view: overall, home and away records.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::{compute_form, compute_record, TeamRecord, RECENT_WINDOW};
use crate::models::{Match, Membership, Team, TeamId};

/// A record with its derived points, for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    #[serde(flatten)]
    pub record: TeamRecord,
    pub points: u32,
}

impl From<TeamRecord> for RecordSummary {
    fn from(record: TeamRecord) -> Self {
        Self {
            points: record.points(),
            record,
        }
    }
}

/// Aggregate view of one team inside a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team: Team,

    /// Group the team is enrolled in, if any
    pub group_name: Option<String>,

    pub overall: RecordSummary,
    pub home: RecordSummary,
    pub away: RecordSummary,

    /// Last results, oldest first, at most 5 chars of W/D/L
    pub form: String,

    /// Most recent matches of any status, newest first, for display
    pub recent_matches: Vec<Match>,
}

/// Compute a team's statistics view, or `None` when the team is not a
/// member of the competition.
pub fn compute_team_stats(
    teams: &[Team],
    memberships: &[Membership],
    matches: &[Match],
    team_id: &TeamId,
) -> Option<TeamStats> {
    let membership = memberships.iter().find(|ms| ms.team_id == *team_id)?;
    let team = teams.iter().find(|t| t.id == *team_id)?.clone();

    let mut involving: Vec<Match> = matches
        .iter()
        .filter(|m| m.involves(team_id))
        .cloned()
        .collect();
    involving.sort_by_key(|m| Reverse(m.kickoff));

    let home: Vec<Match> = involving
        .iter()
        .filter(|m| m.home_team_id == *team_id)
        .cloned()
        .collect();
    let away: Vec<Match> = involving
        .iter()
        .filter(|m| m.away_team_id == *team_id)
        .cloned()
        .collect();

    // compute_record skips anything that is not finished, so the
    // partitions can be passed whole.
    Some(TeamStats {
        overall: compute_record(&involving, team_id).into(),
        home: compute_record(&home, team_id).into(),
        away: compute_record(&away, team_id).into(),
        form: compute_form(&involving, team_id),
        recent_matches: involving.iter().take(RECENT_WINDOW).cloned().collect(),
        group_name: membership.group_name.clone(),
        team,
    })
}
