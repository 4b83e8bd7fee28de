use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Match, Round, RoundId};
use crate::standings;
use crate::storage::{resolve_competition_id, EntityType, JsonlReader};

#[derive(Debug, Deserialize)]
pub struct MatchListParams {
    pub group: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
pub struct RoundsResponse {
    pub rounds: Vec<Round>,
}

#[derive(Debug, Serialize)]
pub struct CurrentRoundResponse {
    pub round: Option<Round>,
}

fn read_matches(state: &AppState, competition_id: &str) -> Result<Vec<Match>, ApiError> {
    Ok(JsonlReader::for_entity(&state.storage, EntityType::Match, competition_id).read_all()?)
}

fn read_rounds(state: &AppState, competition_id: &str) -> Result<Vec<Round>, ApiError> {
    Ok(JsonlReader::for_entity(&state.storage, EntityType::Round, competition_id).read_all()?)
}

/// All competition matches, most recent first.
pub async fn competition_matches(
    State(state): State<AppState>,
    Path(competition): Path<String>,
    Query(params): Query<MatchListParams>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let competition_id = resolve_competition_id(&state.storage, &competition)?;
    let matches = read_matches(&state, &competition_id)?;

    Ok(Json(MatchesResponse {
        matches: standings::competition_matches(&matches, params.group.as_deref()),
    }))
}

/// All rounds, ordered by round number.
pub async fn rounds(
    State(state): State<AppState>,
    Path(competition): Path<String>,
) -> Result<Json<RoundsResponse>, ApiError> {
    let competition_id = resolve_competition_id(&state.storage, &competition)?;
    let rounds = read_rounds(&state, &competition_id)?;

    Ok(Json(RoundsResponse {
        rounds: standings::sorted_rounds(&rounds),
    }))
}

/// The round currently being played.
pub async fn current_round(
    State(state): State<AppState>,
    Path(competition): Path<String>,
) -> Result<Json<CurrentRoundResponse>, ApiError> {
    let competition_id = resolve_competition_id(&state.storage, &competition)?;
    let rounds = read_rounds(&state, &competition_id)?;
    let matches = read_matches(&state, &competition_id)?;

    Ok(Json(CurrentRoundResponse {
        round: standings::current_round(&rounds, &matches),
    }))
}

/// Matches of a single round, in kickoff order.
pub async fn round_matches(
    State(state): State<AppState>,
    Path((competition, round)): Path<(String, String)>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let competition_id = resolve_competition_id(&state.storage, &competition)?;
    let matches = read_matches(&state, &competition_id)?;

    Ok(Json(MatchesResponse {
        matches: standings::round_matches(&matches, &RoundId::from(round.as_str())),
    }))
}
