use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{load_competition_data, ApiError};
use crate::models::{Membership, TeamId};
use crate::standings::{
    compute_head_to_head, compute_standings, compute_team_stats, distinct_groups, HeadToHead,
    StandingEntry, TeamStats,
};
use crate::storage::{resolve_competition_id, EntityType, JsonlReader};

// ── Standings Table ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StandingsParams {
    pub group: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingEntry>,
}

pub async fn standings(
    State(state): State<AppState>,
    Path(competition): Path<String>,
    Query(params): Query<StandingsParams>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let competition_id = resolve_competition_id(&state.storage, &competition)?;
    let data = load_competition_data(&state.storage, &competition_id)?;

    let standings = compute_standings(
        &data.teams,
        &data.memberships,
        &data.matches,
        params.group.as_deref(),
    );
    Ok(Json(StandingsResponse { standings }))
}

// ── Group Listing ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GroupsResponse {
    pub groups: Vec<String>,
}

pub async fn groups(
    State(state): State<AppState>,
    Path(competition): Path<String>,
) -> Result<Json<GroupsResponse>, ApiError> {
    let competition_id = resolve_competition_id(&state.storage, &competition)?;
    let memberships: Vec<Membership> =
        JsonlReader::for_entity(&state.storage, EntityType::Membership, &competition_id)
            .read_all()?;

    Ok(Json(GroupsResponse {
        groups: distinct_groups(&memberships),
    }))
}

// ── Head-to-Head ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct HeadToHeadParams {
    pub team1: Option<String>,
    pub team2: Option<String>,
}

pub async fn head_to_head(
    State(state): State<AppState>,
    Path(competition): Path<String>,
    Query(params): Query<HeadToHeadParams>,
) -> Result<Json<HeadToHead>, ApiError> {
    let (Some(team1), Some(team2)) = (params.team1, params.team2) else {
        return Err(ApiError::BadRequest(
            "team1 and team2 query parameters are required".to_string(),
        ));
    };

    let competition_id = resolve_competition_id(&state.storage, &competition)?;
    let data = load_competition_data(&state.storage, &competition_id)?;

    let result = compute_head_to_head(
        &data.teams,
        &data.matches,
        &TeamId::from(team1),
        &TeamId::from(team2),
    );
    Ok(Json(result))
}

// ── Team Stats ──────────────────────────────────────────────────

pub async fn team_stats(
    State(state): State<AppState>,
    Path((competition, team)): Path<(String, String)>,
) -> Result<Json<TeamStats>, ApiError> {
    let competition_id = resolve_competition_id(&state.storage, &competition)?;
    let data = load_competition_data(&state.storage, &competition_id)?;

    let team_id = TeamId::from(team.as_str());
    compute_team_stats(&data.teams, &data.memberships, &data.matches, &team_id)
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Team {} is not a member of competition {}",
                team, competition_id
            ))
        })
}
