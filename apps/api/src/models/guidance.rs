#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Generated application advice for one (profile, scholarship) pair.
/// All three lists are non-empty — the guidance pipeline backfills filler
/// entries when the provider fails or returns a partial object.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationGuidance {
    pub id: String,
    pub profile_id: String,
    pub scholarship_id: String,
    pub essay_tips: Vec<String>,
    pub checklist: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGuidance {
    pub profile_id: String,
    pub scholarship_id: String,
    pub essay_tips: Vec<String>,
    pub checklist: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}
