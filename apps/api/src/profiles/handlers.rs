//! Axum route handlers for profiles and the mock auth endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::{NewStudentProfile, StudentProfile};
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub user_id: String,
    pub profile: NewStudentProfile,
}

/// POST /api/register — demo auth, no hashing, no sessions.
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if request.username.trim().is_empty() || request.password.trim().is_empty() {
        return Err(AppError::Validation(
            "Username and password required".to_string(),
        ));
    }
    if state
        .storage
        .get_user_by_username(&request.username)
        .await?
        .is_some()
    {
        return Err(AppError::Validation("User already exists".to_string()));
    }

    let user = state
        .storage
        .create_user(&request.username, &request.password)
        .await?;
    Ok(Json(AuthResponse {
        message: "Account created successfully".to_string(),
        user,
    }))
}

/// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state
        .storage
        .get_user_by_username(&request.username)
        .await?
        .filter(|u| u.password == request.password)
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user,
    }))
}

/// POST /api/profile — 201 with the created profile, 400 when userId is
/// missing.
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<StudentProfile>), AppError> {
    if request.user_id.trim().is_empty() {
        return Err(AppError::Validation("User ID required".to_string()));
    }

    let profile = state
        .storage
        .create_profile(&request.user_id, request.profile)
        .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/profile/:id — accepts a user id or a profile id.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentProfile>, AppError> {
    let profile = state
        .storage
        .find_profile(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
    Ok(Json(profile))
}

/// PUT /api/profile/:id — in-place edit of an existing profile.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(profile): Json<NewStudentProfile>,
) -> Result<Json<StudentProfile>, AppError> {
    let updated = state
        .storage
        .update_profile(&id, profile)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
    Ok(Json(updated))
}
