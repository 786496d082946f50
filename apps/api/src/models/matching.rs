#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::scholarship::Scholarship;

/// A scored association between one profile and one scholarship.
/// Created only by the match pipeline; afterwards only `status` changes.
/// Rescoring means regenerating, never editing a score in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipMatch {
    pub id: String,
    pub profile_id: String,
    pub scholarship_id: String,
    /// Always within [0, 100]; the normalizer clamps before persisting.
    pub match_score: i32,
    pub ai_reasoning: Option<String>,
    /// Stored as an open string: transitions accept any non-empty status,
    /// `MatchStatus` only names the values the app writes itself.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    New,
    Pending,
    Favorited,
    Passed,
    Applied,
    Rejected,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::New => "new",
            MatchStatus::Pending => "pending",
            MatchStatus::Favorited => "favorited",
            MatchStatus::Passed => "passed",
            MatchStatus::Applied => "applied",
            MatchStatus::Rejected => "rejected",
        }
    }
}

/// A match with its scholarship record embedded, as returned by the match
/// listing so clients can render title/amount/deadline without extra lookups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWithScholarship {
    #[serde(flatten)]
    pub match_record: ScholarshipMatch,
    /// None when the referenced scholarship row no longer exists.
    pub scholarship: Option<Scholarship>,
}

#[derive(Debug, Clone)]
pub struct NewMatch {
    pub profile_id: String,
    pub scholarship_id: String,
    pub match_score: i32,
    pub ai_reasoning: Option<String>,
    pub status: String,
}
