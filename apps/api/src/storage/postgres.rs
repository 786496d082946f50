//! Durable storage against the five-table Postgres schema
//! (see `migrations/0001_init.sql`).

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::guidance::{ApplicationGuidance, NewGuidance};
use crate::models::matching::{MatchWithScholarship, NewMatch, ScholarshipMatch};
use crate::models::profile::{NewStudentProfile, StudentProfile};
use crate::models::scholarship::{NewScholarship, Scholarship, ScholarshipFilter};
use crate::models::user::User;

use super::{Storage, StorageResult};

pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn create_user(&self, username: &str, password: &str) -> StorageResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password) VALUES ($1, $2) RETURNING *",
        )
        .bind(username)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_profile(
        &self,
        user_id: &str,
        profile: NewStudentProfile,
    ) -> StorageResult<StudentProfile> {
        let created = sqlx::query_as::<_, StudentProfile>(
            r#"
            INSERT INTO student_profiles
                (user_id, name, email, education_level, field_of_study, gpa,
                 graduation_year, skills, activities, financial_need, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.education_level)
        .bind(&profile.field_of_study)
        .bind(&profile.gpa)
        .bind(&profile.graduation_year)
        .bind(&profile.skills)
        .bind(&profile.activities)
        .bind(profile.financial_need.as_str())
        .bind(profile.location.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_profile(&self, key: &str) -> StorageResult<Option<StudentProfile>> {
        // A user-id hit wins over a profile-id hit when both rows exist.
        let profile = sqlx::query_as::<_, StudentProfile>(
            "SELECT * FROM student_profiles WHERE user_id = $1 OR id = $1 \
             ORDER BY (user_id = $1) DESC LIMIT 1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn update_profile(
        &self,
        profile_id: &str,
        profile: NewStudentProfile,
    ) -> StorageResult<Option<StudentProfile>> {
        let updated = sqlx::query_as::<_, StudentProfile>(
            r#"
            UPDATE student_profiles
            SET name = $2, email = $3, education_level = $4, field_of_study = $5,
                gpa = $6, graduation_year = $7, skills = $8, activities = $9,
                financial_need = $10, location = $11, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(profile_id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.education_level)
        .bind(&profile.field_of_study)
        .bind(&profile.gpa)
        .bind(&profile.graduation_year)
        .bind(&profile.skills)
        .bind(&profile.activities)
        .bind(profile.financial_need.as_str())
        .bind(profile.location.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn list_scholarships(
        &self,
        filter: &ScholarshipFilter,
    ) -> StorageResult<Vec<Scholarship>> {
        // NULL eligibility lists mean "open to all" and pass the filter.
        let scholarships = sqlx::query_as::<_, Scholarship>(
            r#"
            SELECT * FROM scholarships
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR type = $1)
              AND ($2::text IS NULL OR $2 = ANY(tags))
              AND ($3::text IS NULL OR eligible_fields IS NULL OR $3 = ANY(eligible_fields))
              AND ($4::text IS NULL OR eligible_levels IS NULL OR $4 = ANY(eligible_levels))
            ORDER BY created_at DESC
            "#,
        )
        .bind(&filter.scholarship_type)
        .bind(&filter.tag)
        .bind(&filter.field)
        .bind(&filter.level)
        .fetch_all(&self.pool)
        .await?;
        Ok(scholarships)
    }

    async fn get_scholarship(&self, id: &str) -> StorageResult<Option<Scholarship>> {
        let scholarship =
            sqlx::query_as::<_, Scholarship>("SELECT * FROM scholarships WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(scholarship)
    }

    async fn create_scholarship(&self, scholarship: NewScholarship) -> StorageResult<Scholarship> {
        let created = sqlx::query_as::<_, Scholarship>(
            r#"
            INSERT INTO scholarships
                (title, organization, amount, deadline, description, requirements,
                 tags, type, eligibility_gpa, eligible_fields, eligible_levels)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&scholarship.title)
        .bind(&scholarship.organization)
        .bind(&scholarship.amount)
        .bind(&scholarship.deadline)
        .bind(&scholarship.description)
        .bind(&scholarship.requirements)
        .bind(&scholarship.tags)
        .bind(scholarship.scholarship_type.as_str())
        .bind(&scholarship.eligibility_gpa)
        .bind(&scholarship.eligible_fields)
        .bind(&scholarship.eligible_levels)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn insert_matches(&self, batch: Vec<NewMatch>) -> StorageResult<Vec<ScholarshipMatch>> {
        // One transaction per batch: a failure on any row persists nothing.
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(batch.len());
        for m in batch {
            let row = sqlx::query_as::<_, ScholarshipMatch>(
                r#"
                INSERT INTO scholarship_matches
                    (profile_id, scholarship_id, match_score, ai_reasoning, status)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(&m.profile_id)
            .bind(&m.scholarship_id)
            .bind(m.match_score)
            .bind(&m.ai_reasoning)
            .bind(&m.status)
            .fetch_one(&mut *tx)
            .await?;
            created.push(row);
        }
        tx.commit().await?;
        Ok(created)
    }

    async fn matches_for_profile(
        &self,
        profile_id: &str,
    ) -> StorageResult<Vec<ScholarshipMatch>> {
        let matches = sqlx::query_as::<_, ScholarshipMatch>(
            "SELECT * FROM scholarship_matches WHERE profile_id = $1 ORDER BY match_score DESC",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(matches)
    }

    async fn matches_with_scholarships(
        &self,
        profile_id: &str,
    ) -> StorageResult<Vec<MatchWithScholarship>> {
        let matches = self.matches_for_profile(profile_id).await?;
        let ids: Vec<String> = matches.iter().map(|m| m.scholarship_id.clone()).collect();
        let scholarships: Vec<Scholarship> =
            sqlx::query_as::<_, Scholarship>("SELECT * FROM scholarships WHERE id = ANY($1)")
                .bind(&ids)
                .fetch_all(&self.pool)
                .await?;
        let by_id: HashMap<String, Scholarship> = scholarships
            .into_iter()
            .map(|s| (s.id.clone(), s))
            .collect();

        Ok(matches
            .into_iter()
            .map(|m| {
                let scholarship = by_id.get(&m.scholarship_id).cloned();
                MatchWithScholarship {
                    match_record: m,
                    scholarship,
                }
            })
            .collect())
    }

    async fn update_match_status(
        &self,
        match_id: &str,
        status: &str,
    ) -> StorageResult<Option<ScholarshipMatch>> {
        let updated = sqlx::query_as::<_, ScholarshipMatch>(
            "UPDATE scholarship_matches SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(match_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn create_guidance(&self, guidance: NewGuidance) -> StorageResult<ApplicationGuidance> {
        let created = sqlx::query_as::<_, ApplicationGuidance>(
            r#"
            INSERT INTO application_guidance
                (profile_id, scholarship_id, essay_tips, checklist, improvement_suggestions)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&guidance.profile_id)
        .bind(&guidance.scholarship_id)
        .bind(&guidance.essay_tips)
        .bind(&guidance.checklist)
        .bind(&guidance.improvement_suggestions)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_guidance(
        &self,
        profile_id: &str,
        scholarship_id: &str,
    ) -> StorageResult<Option<ApplicationGuidance>> {
        let guidance = sqlx::query_as::<_, ApplicationGuidance>(
            r#"
            SELECT * FROM application_guidance
            WHERE profile_id = $1 AND scholarship_id = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(profile_id)
        .bind(scholarship_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(guidance)
    }
}
