//! Axum route handler for the guidance API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guidance::pipeline::generate_guidance;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceRequest {
    pub profile_id: String,
    pub scholarship_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceResponse {
    pub profile_id: String,
    pub scholarship_id: String,
    pub essay_tips: Vec<String>,
    pub checklist: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

/// POST /api/guidance
///
/// 404 when the profile or scholarship is unknown; AI failures degrade to
/// the fixed default guidance, never to an error.
pub async fn handle_generate_guidance(
    State(state): State<AppState>,
    Json(request): Json<GuidanceRequest>,
) -> Result<Json<GuidanceResponse>, AppError> {
    if request.profile_id.trim().is_empty() || request.scholarship_id.trim().is_empty() {
        return Err(AppError::Validation(
            "profileId and scholarshipId are required".to_string(),
        ));
    }

    let guidance = generate_guidance(
        state.storage.as_ref(),
        state.ai.as_ref(),
        &request.profile_id,
        &request.scholarship_id,
    )
    .await?;

    Ok(Json(GuidanceResponse {
        profile_id: guidance.profile_id,
        scholarship_id: guidance.scholarship_id,
        essay_tips: guidance.essay_tips,
        checklist: guidance.checklist,
        improvement_suggestions: guidance.improvement_suggestions,
    }))
}
