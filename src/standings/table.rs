//! Standings table aggregation.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use super::{TeamRecord, FORM_WINDOW};
use crate::models::{Match, Membership, Outcome, Team, TeamId};

/// One row of a standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    /// 1-based rank within the entry's group
    pub position: u32,

    /// The ranked team
    pub team: Team,

    /// Group this row belongs to, if the competition has groups
    pub group_name: Option<String>,

    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,

    /// Last results, oldest first, at most 5 chars of W/D/L
    pub form: String,
}

/// Per-team accumulator keyed by team id during the fold.
struct TableSlot {
    team: Team,
    group_name: Option<String>,
    record: TeamRecord,
    form: VecDeque<Outcome>,
}

impl TableSlot {
    fn seed(team: Team, group_name: Option<String>) -> Self {
        Self {
            team,
            group_name,
            record: TeamRecord::default(),
            form: VecDeque::with_capacity(FORM_WINDOW),
        }
    }

    fn absorb(&mut self, m: &Match) {
        self.record.apply(m, &self.team.id);
        if let Some(outcome) = m.outcome_for(&self.team.id) {
            if self.form.len() == FORM_WINDOW {
                self.form.pop_front();
            }
            self.form.push_back(outcome);
        }
    }
}

/// Compute the ranked standings table for a competition.
///
/// Every membership seeds a row, so teams without finished matches appear
/// with all-zero statistics. When `group` is given, only that group's
/// memberships and matches are considered. Rows are ordered by group name,
/// then points, goal difference, goals scored, and finally team name;
/// positions restart at 1 in each group partition.
pub fn compute_standings(
    teams: &[Team],
    memberships: &[Membership],
    matches: &[Match],
    group: Option<&str>,
) -> Vec<StandingEntry> {
    let team_index: HashMap<&TeamId, &Team> = teams.iter().map(|t| (&t.id, t)).collect();

    let mut table: HashMap<TeamId, TableSlot> = HashMap::new();
    for ms in memberships {
        if group.is_some() && ms.group_name.as_deref() != group {
            continue;
        }
        let Some(team) = team_index.get(&ms.team_id) else {
            tracing::warn!("membership references unknown team {}", ms.team_id);
            continue;
        };
        table.insert(
            ms.team_id.clone(),
            TableSlot::seed((*team).clone(), ms.group_name.clone()),
        );
    }

    // The fold must run in kickoff order: points and goals are
    // order-independent, the bounded form buffer is not.
    let mut ordered: Vec<&Match> = matches
        .iter()
        .filter(|m| m.is_finished())
        .filter(|m| group.is_none() || m.group_name.as_deref() == group)
        .collect();
    ordered.sort_by_key(|m| m.kickoff);

    for m in ordered {
        for team_id in [&m.home_team_id, &m.away_team_id] {
            if let Some(slot) = table.get_mut(team_id) {
                slot.absorb(m);
            }
        }
    }

    let mut slots: Vec<TableSlot> = table.into_values().collect();
    slots.sort_by(|a, b| {
        a.group_name
            .cmp(&b.group_name)
            .then_with(|| b.record.points().cmp(&a.record.points()))
            .then_with(|| b.record.goal_difference.cmp(&a.record.goal_difference))
            .then_with(|| b.record.goals_for.cmp(&a.record.goals_for))
            .then_with(|| a.team.name.cmp(&b.team.name))
    });

    // Enumerate each group partition independently.
    let mut entries = Vec::with_capacity(slots.len());
    let mut position = 0u32;
    let mut current_group: Option<Option<String>> = None;
    for slot in slots {
        if current_group.as_ref() != Some(&slot.group_name) {
            current_group = Some(slot.group_name.clone());
            position = 0;
        }
        position += 1;

        let record = slot.record;
        entries.push(StandingEntry {
            position,
            team: slot.team,
            group_name: slot.group_name,
            points: record.points(),
            played: record.played,
            won: record.won,
            drawn: record.drawn,
            lost: record.lost,
            goals_for: record.goals_for,
            goals_against: record.goals_against,
            goal_difference: record.goal_difference,
            form: slot.form.iter().map(|o| o.letter()).collect(),
        });
    }
    entries
}
