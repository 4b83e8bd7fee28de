//! Recent-form strings.

use std::cmp::Reverse;

use crate::models::{Match, Outcome, TeamId};

/// Number of results a form string covers.
pub const FORM_WINDOW: usize = 5;

/// Build a team's form string from its matches.
///
/// Takes the team's 5 most recent finished matches and renders them
/// oldest-first as W/D/L letters. Shorter when fewer results exist, never
/// padded.
pub fn compute_form(matches: &[Match], team_id: &TeamId) -> String {
    let mut finished: Vec<&Match> = matches
        .iter()
        .filter(|m| m.is_finished() && m.involves(team_id))
        .collect();
    finished.sort_by_key(|m| Reverse(m.kickoff));

    finished
        .iter()
        .take(FORM_WINDOW)
        .rev()
        .filter_map(|m| m.outcome_for(team_id))
        .map(Outcome::letter)
        .collect()
}
