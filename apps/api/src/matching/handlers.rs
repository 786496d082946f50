//! Axum route handlers for the matches API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::pipeline::generate_matches;
use crate::models::matching::{MatchWithScholarship, ScholarshipMatch};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMatchesRequest {
    pub profile_id: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateMatchesResponse {
    pub matches: Vec<ScholarshipMatch>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// POST /api/matches/generate
///
/// Runs the full pipeline and persists the batch. Provider failures never
/// surface here — the response degrades to uniformly-scored fallback matches.
pub async fn handle_generate_matches(
    State(state): State<AppState>,
    Json(request): Json<GenerateMatchesRequest>,
) -> Result<Json<GenerateMatchesResponse>, AppError> {
    if request.profile_id.trim().is_empty() {
        return Err(AppError::Validation("profileId is required".to_string()));
    }

    let matches = generate_matches(
        state.storage.as_ref(),
        state.ai.as_ref(),
        &request.profile_id,
    )
    .await?;

    Ok(Json(GenerateMatchesResponse { matches }))
}

/// GET /api/matches/:profile_id
///
/// All matches for a profile with the scholarship embedded, highest score
/// first. Empty array when none.
pub async fn handle_list_matches(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<Vec<MatchWithScholarship>>, AppError> {
    let matches = state.storage.matches_with_scholarships(&profile_id).await?;
    Ok(Json(matches))
}

/// PUT /api/matches/:match_id/status
///
/// Unconditional overwrite — any non-empty status string is accepted, no
/// transition rules are enforced.
pub async fn handle_update_match_status(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<ScholarshipMatch>, AppError> {
    if request.status.trim().is_empty() {
        return Err(AppError::Validation("status is required".to_string()));
    }

    let updated = state
        .storage
        .update_match_status(&match_id, &request.status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match {match_id} not found")))?;

    Ok(Json(updated))
}
