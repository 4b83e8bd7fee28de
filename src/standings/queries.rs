//! Round and match listing queries.
//!
//! Filtering and ordering only; the aggregation lives in the sibling
//! modules.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::models::{Match, Membership, Round, RoundId};

/// Distinct non-null group names for a competition, ascending.
pub fn distinct_groups(memberships: &[Membership]) -> Vec<String> {
    let groups: BTreeSet<String> = memberships
        .iter()
        .filter_map(|ms| ms.group_name.clone())
        .collect();
    groups.into_iter().collect()
}

/// Rounds ordered by round number.
pub fn sorted_rounds(rounds: &[Round]) -> Vec<Round> {
    let mut rounds = rounds.to_vec();
    rounds.sort_by_key(|r| r.round_number);
    rounds
}

/// Resolve the competition's current round: the lowest-numbered round
/// that still has an unfinished match, else the last round once the
/// season is over. `None` when the competition has no rounds.
pub fn current_round(rounds: &[Round], matches: &[Match]) -> Option<Round> {
    let rounds = sorted_rounds(rounds);
    for round in &rounds {
        let pending = matches
            .iter()
            .any(|m| m.round_id.as_ref() == Some(&round.id) && !m.is_finished());
        if pending {
            return Some(round.clone());
        }
    }
    rounds.last().cloned()
}

/// Matches of a single round, kickoff ascending.
pub fn round_matches(matches: &[Match], round_id: &RoundId) -> Vec<Match> {
    let mut listed: Vec<Match> = matches
        .iter()
        .filter(|m| m.round_id.as_ref() == Some(round_id))
        .cloned()
        .collect();
    listed.sort_by_key(|m| m.kickoff);
    listed
}

/// All competition matches, kickoff descending, optionally scoped to a
/// group.
pub fn competition_matches(matches: &[Match], group: Option<&str>) -> Vec<Match> {
    let mut listed: Vec<Match> = matches
        .iter()
        .filter(|m| group.is_none() || m.group_name.as_deref() == group)
        .cloned()
        .collect();
    listed.sort_by_key(|m| Reverse(m.kickoff));
    listed
}
