use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Match, Team};
use crate::storage::{read_competitions, EntityType, JsonlReader};

#[derive(Debug, Serialize)]
pub struct CompetitionSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub team_count: u32,
    pub match_count: u32,
}

#[derive(Debug, Serialize)]
pub struct CompetitionsResponse {
    pub competitions: Vec<CompetitionSummary>,
}

pub async fn list_competitions(
    State(state): State<AppState>,
) -> Result<Json<CompetitionsResponse>, ApiError> {
    let registry = read_competitions(&state.storage)?;

    let competitions = registry
        .iter()
        .map(|c| {
            let competition_id = c.id.as_str();
            let team_count =
                JsonlReader::<Team>::for_entity(&state.storage, EntityType::Team, competition_id)
                    .read_all()
                    .map(|v| v.len() as u32)
                    .unwrap_or(0);
            let match_count =
                JsonlReader::<Match>::for_entity(&state.storage, EntityType::Match, competition_id)
                    .read_all()
                    .map(|v| v.len() as u32)
                    .unwrap_or(0);
            CompetitionSummary {
                id: competition_id.to_string(),
                name: c.name.clone(),
                slug: c.slug.clone(),
                team_count,
                match_count,
            }
        })
        .collect();

    Ok(Json(CompetitionsResponse { competitions }))
}
