//! Axum route handler for the scholarship catalog.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::models::scholarship::{Scholarship, ScholarshipFilter};
use crate::state::AppState;
use crate::storage::seed::ensure_seeded;

/// GET /api/scholarships
///
/// Active scholarships, newest first, optionally narrowed by `type`, `tag`,
/// `field`, or `level`. Seeds the demo catalog when the table is empty so a
/// fresh deployment is never blank.
pub async fn handle_list_scholarships(
    State(state): State<AppState>,
    Query(filter): Query<ScholarshipFilter>,
) -> Result<Json<Vec<Scholarship>>, AppError> {
    ensure_seeded(state.storage.as_ref()).await?;
    let scholarships = state.storage.list_scholarships(&filter).await?;
    Ok(Json(scholarships))
}
