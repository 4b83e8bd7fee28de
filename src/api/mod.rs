//! REST API endpoints.
//!
//! Axum-based HTTP API over the standings engine. Handlers issue a small
//! fixed number of bulk reads per request and fold over them in memory;
//! nothing is cached between calls.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::models::{Match, Membership, Round, Team};
use crate::storage::{EntityType, JsonlReader, StorageConfig, StorageError};

pub mod routes;
pub mod state;

use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// One competition's collections, bulk-loaded for a single request.
pub struct CompetitionData {
    pub teams: Vec<Team>,
    pub memberships: Vec<Membership>,
    pub matches: Vec<Match>,
    pub rounds: Vec<Round>,
}

/// Load everything the aggregators need in four bulk reads.
pub fn load_competition_data(
    storage: &StorageConfig,
    competition_id: &str,
) -> Result<CompetitionData, ApiError> {
    Ok(CompetitionData {
        teams: JsonlReader::for_entity(storage, EntityType::Team, competition_id).read_all()?,
        memberships: JsonlReader::for_entity(storage, EntityType::Membership, competition_id)
            .read_all()?,
        matches: JsonlReader::for_entity(storage, EntityType::Match, competition_id).read_all()?,
        rounds: JsonlReader::for_entity(storage, EntityType::Round, competition_id).read_all()?,
    })
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/competitions", get(routes::competitions::list_competitions))
        .route(
            "/api/standings/competition/:competition",
            get(routes::standings::standings),
        )
        .route(
            "/api/standings/competition/:competition/groups",
            get(routes::standings::groups),
        )
        .route(
            "/api/standings/competition/:competition/head-to-head",
            get(routes::standings::head_to_head),
        )
        .route(
            "/api/standings/competition/:competition/team/:team/stats",
            get(routes::standings::team_stats),
        )
        .route(
            "/api/standings/competition/:competition/matches",
            get(routes::matches::competition_matches),
        )
        .route(
            "/api/standings/competition/:competition/rounds",
            get(routes::matches::rounds),
        )
        .route(
            "/api/standings/competition/:competition/current-round",
            get(routes::matches::current_round),
        )
        .route(
            "/api/standings/competition/:competition/round/:round/matches",
            get(routes::matches::round_matches),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
