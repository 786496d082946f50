//! Storage abstraction — one trait, two backends.
//!
//! `PgStorage` is the durable variant; `MemoryStorage` serves demos and
//! tests. The backend is selected once at process start and never mixed at
//! runtime. Not-found is `Option`-shaped; `StorageError` is reserved for
//! backend failures and surfaces as HTTP 500.

pub mod memory;
pub mod postgres;
pub mod seed;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::guidance::{ApplicationGuidance, NewGuidance};
use crate::models::matching::{MatchWithScholarship, NewMatch, ScholarshipMatch};
use crate::models::profile::{NewStudentProfile, StudentProfile};
use crate::models::scholarship::{NewScholarship, Scholarship, ScholarshipFilter};
use crate::models::user::User;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_user(&self, username: &str, password: &str) -> StorageResult<User>;
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;

    async fn create_profile(
        &self,
        user_id: &str,
        profile: NewStudentProfile,
    ) -> StorageResult<StudentProfile>;
    /// Looks up by user id first, then by profile id — clients send either.
    async fn find_profile(&self, key: &str) -> StorageResult<Option<StudentProfile>>;
    /// In-place edit. Returns `None` when the profile id is unknown.
    async fn update_profile(
        &self,
        profile_id: &str,
        profile: NewStudentProfile,
    ) -> StorageResult<Option<StudentProfile>>;

    /// Active scholarships matching the filter, newest first.
    async fn list_scholarships(
        &self,
        filter: &ScholarshipFilter,
    ) -> StorageResult<Vec<Scholarship>>;
    async fn get_scholarship(&self, id: &str) -> StorageResult<Option<Scholarship>>;
    async fn create_scholarship(&self, scholarship: NewScholarship) -> StorageResult<Scholarship>;

    /// Appends one generation batch atomically: a failed batch persists
    /// nothing. Repeated generation runs accumulate batches; nothing is
    /// deduplicated or superseded.
    async fn insert_matches(&self, batch: Vec<NewMatch>) -> StorageResult<Vec<ScholarshipMatch>>;
    /// All matches for a profile, highest score first.
    async fn matches_for_profile(&self, profile_id: &str)
        -> StorageResult<Vec<ScholarshipMatch>>;
    /// Matches for a profile with the scholarship record embedded, highest
    /// score first. The embed is `None` when the scholarship is missing.
    async fn matches_with_scholarships(
        &self,
        profile_id: &str,
    ) -> StorageResult<Vec<MatchWithScholarship>>;
    /// Unconditional status overwrite. `None` when the match id is unknown.
    async fn update_match_status(
        &self,
        match_id: &str,
        status: &str,
    ) -> StorageResult<Option<ScholarshipMatch>>;

    async fn create_guidance(&self, guidance: NewGuidance) -> StorageResult<ApplicationGuidance>;
    /// Most recent stored guidance for a (profile, scholarship) pair.
    async fn find_guidance(
        &self,
        profile_id: &str,
        scholarship_id: &str,
    ) -> StorageResult<Option<ApplicationGuidance>>;
}
