//! Map-backed storage for demos and tests. No durability, no database.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::guidance::{ApplicationGuidance, NewGuidance};
use crate::models::matching::{MatchWithScholarship, NewMatch, ScholarshipMatch};
use crate::models::profile::{NewStudentProfile, StudentProfile};
use crate::models::scholarship::{NewScholarship, Scholarship, ScholarshipFilter};
use crate::models::user::User;

use super::{Storage, StorageResult};

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    profiles: HashMap<String, StudentProfile>,
    scholarships: Vec<Scholarship>,
    matches: Vec<ScholarshipMatch>,
    guidance: Vec<ApplicationGuidance>,
}

#[derive(Default)]
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_user(&self, username: &str, password: &str) -> StorageResult<User> {
        let user = User {
            id: new_id(),
            username: username.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        };
        let mut inner = self.inner.write().unwrap();
        inner.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_profile(
        &self,
        user_id: &str,
        profile: NewStudentProfile,
    ) -> StorageResult<StudentProfile> {
        let now = Utc::now();
        let created = StudentProfile {
            id: new_id(),
            user_id: user_id.to_string(),
            name: profile.name,
            email: profile.email,
            education_level: profile.education_level,
            field_of_study: profile.field_of_study,
            gpa: profile.gpa,
            graduation_year: profile.graduation_year,
            skills: profile.skills,
            activities: profile.activities,
            financial_need: profile.financial_need.as_str().to_string(),
            location: profile.location.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.inner.write().unwrap();
        inner.profiles.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn find_profile(&self, key: &str) -> StorageResult<Option<StudentProfile>> {
        let inner = self.inner.read().unwrap();
        let by_user = inner.profiles.values().find(|p| p.user_id == key).cloned();
        Ok(by_user.or_else(|| inner.profiles.get(key).cloned()))
    }

    async fn update_profile(
        &self,
        profile_id: &str,
        profile: NewStudentProfile,
    ) -> StorageResult<Option<StudentProfile>> {
        let mut inner = self.inner.write().unwrap();
        let Some(existing) = inner.profiles.get_mut(profile_id) else {
            return Ok(None);
        };
        existing.name = profile.name;
        existing.email = profile.email;
        existing.education_level = profile.education_level;
        existing.field_of_study = profile.field_of_study;
        existing.gpa = profile.gpa;
        existing.graduation_year = profile.graduation_year;
        existing.skills = profile.skills;
        existing.activities = profile.activities;
        existing.financial_need = profile.financial_need.as_str().to_string();
        existing.location = profile.location.as_str().to_string();
        existing.updated_at = Utc::now();
        Ok(Some(existing.clone()))
    }

    async fn list_scholarships(
        &self,
        filter: &ScholarshipFilter,
    ) -> StorageResult<Vec<Scholarship>> {
        let inner = self.inner.read().unwrap();
        let mut result: Vec<Scholarship> = inner
            .scholarships
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn get_scholarship(&self, id: &str) -> StorageResult<Option<Scholarship>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.scholarships.iter().find(|s| s.id == id).cloned())
    }

    async fn create_scholarship(&self, scholarship: NewScholarship) -> StorageResult<Scholarship> {
        let created = Scholarship {
            id: new_id(),
            title: scholarship.title,
            organization: scholarship.organization,
            amount: scholarship.amount,
            deadline: scholarship.deadline,
            description: scholarship.description,
            requirements: scholarship.requirements,
            tags: scholarship.tags,
            scholarship_type: scholarship.scholarship_type.as_str().to_string(),
            eligibility_gpa: scholarship.eligibility_gpa,
            eligible_fields: scholarship.eligible_fields,
            eligible_levels: scholarship.eligible_levels,
            is_active: true,
            created_at: Utc::now(),
        };
        let mut inner = self.inner.write().unwrap();
        inner.scholarships.push(created.clone());
        Ok(created)
    }

    async fn insert_matches(&self, batch: Vec<NewMatch>) -> StorageResult<Vec<ScholarshipMatch>> {
        let mut created = Vec::with_capacity(batch.len());
        let mut inner = self.inner.write().unwrap();
        for m in batch {
            let row = ScholarshipMatch {
                id: new_id(),
                profile_id: m.profile_id,
                scholarship_id: m.scholarship_id,
                match_score: m.match_score,
                ai_reasoning: m.ai_reasoning,
                status: m.status,
                created_at: Utc::now(),
            };
            inner.matches.push(row.clone());
            created.push(row);
        }
        Ok(created)
    }

    async fn matches_for_profile(
        &self,
        profile_id: &str,
    ) -> StorageResult<Vec<ScholarshipMatch>> {
        let inner = self.inner.read().unwrap();
        let mut result: Vec<ScholarshipMatch> = inner
            .matches
            .iter()
            .filter(|m| m.profile_id == profile_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        Ok(result)
    }

    async fn matches_with_scholarships(
        &self,
        profile_id: &str,
    ) -> StorageResult<Vec<MatchWithScholarship>> {
        let inner = self.inner.read().unwrap();
        let mut result: Vec<MatchWithScholarship> = inner
            .matches
            .iter()
            .filter(|m| m.profile_id == profile_id)
            .map(|m| MatchWithScholarship {
                match_record: m.clone(),
                scholarship: inner
                    .scholarships
                    .iter()
                    .find(|s| s.id == m.scholarship_id)
                    .cloned(),
            })
            .collect();
        result.sort_by(|a, b| b.match_record.match_score.cmp(&a.match_record.match_score));
        Ok(result)
    }

    async fn update_match_status(
        &self,
        match_id: &str,
        status: &str,
    ) -> StorageResult<Option<ScholarshipMatch>> {
        let mut inner = self.inner.write().unwrap();
        let Some(existing) = inner.matches.iter_mut().find(|m| m.id == match_id) else {
            return Ok(None);
        };
        existing.status = status.to_string();
        Ok(Some(existing.clone()))
    }

    async fn create_guidance(&self, guidance: NewGuidance) -> StorageResult<ApplicationGuidance> {
        let created = ApplicationGuidance {
            id: new_id(),
            profile_id: guidance.profile_id,
            scholarship_id: guidance.scholarship_id,
            essay_tips: guidance.essay_tips,
            checklist: guidance.checklist,
            improvement_suggestions: guidance.improvement_suggestions,
            created_at: Utc::now(),
        };
        let mut inner = self.inner.write().unwrap();
        inner.guidance.push(created.clone());
        Ok(created)
    }

    async fn find_guidance(
        &self,
        profile_id: &str,
        scholarship_id: &str,
    ) -> StorageResult<Option<ApplicationGuidance>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .guidance
            .iter()
            .rev()
            .find(|g| g.profile_id == profile_id && g.scholarship_id == scholarship_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{FinancialNeed, LocationPreference};
    use crate::models::scholarship::ScholarshipType;

    fn sample_profile() -> NewStudentProfile {
        NewStudentProfile {
            name: "Jess Park".to_string(),
            email: "jess@example.com".to_string(),
            education_level: "undergraduate-senior".to_string(),
            field_of_study: "Computer Science".to_string(),
            gpa: Some("3.8".to_string()),
            graduation_year: "2026".to_string(),
            skills: None,
            activities: None,
            financial_need: FinancialNeed::High,
            location: LocationPreference::National,
        }
    }

    fn sample_scholarship(title: &str) -> NewScholarship {
        NewScholarship {
            title: title.to_string(),
            organization: "Org".to_string(),
            amount: "$5,000".to_string(),
            deadline: "2025-06-01".to_string(),
            description: "desc".to_string(),
            requirements: "reqs".to_string(),
            tags: vec!["stem".to_string()],
            scholarship_type: ScholarshipType::MeritBased,
            eligibility_gpa: None,
            eligible_fields: None,
            eligible_levels: None,
        }
    }

    #[tokio::test]
    async fn test_find_profile_by_user_id_and_profile_id() {
        let storage = MemoryStorage::new();
        let created = storage.create_profile("user-1", sample_profile()).await.unwrap();

        let by_user = storage.find_profile("user-1").await.unwrap().unwrap();
        assert_eq!(by_user.id, created.id);

        let by_id = storage.find_profile(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.id, created.id);

        assert!(storage.find_profile("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_profile_mutates_in_place() {
        let storage = MemoryStorage::new();
        let created = storage.create_profile("user-1", sample_profile()).await.unwrap();

        let mut edit = sample_profile();
        edit.field_of_study = "Physics".to_string();
        let updated = storage
            .update_profile(&created.id, edit)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.field_of_study, "Physics");
        assert_eq!(updated.user_id, "user-1");
    }

    #[tokio::test]
    async fn test_update_match_status_accepts_arbitrary_string() {
        let storage = MemoryStorage::new();
        let created = storage
            .insert_matches(vec![NewMatch {
                profile_id: "p1".to_string(),
                scholarship_id: "s1".to_string(),
                match_score: 50,
                ai_reasoning: None,
                status: "pending".to_string(),
            }])
            .await
            .unwrap();

        let updated = storage
            .update_match_status(&created[0].id, "shortlisted-for-review")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, "shortlisted-for-review");
    }

    #[tokio::test]
    async fn test_update_match_status_unknown_id_is_none() {
        let storage = MemoryStorage::new();
        let result = storage.update_match_status("abc", "favorited").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_matches_sorted_by_score_descending() {
        let storage = MemoryStorage::new();
        let batch = vec![
            NewMatch {
                profile_id: "p1".to_string(),
                scholarship_id: "s1".to_string(),
                match_score: 40,
                ai_reasoning: None,
                status: "pending".to_string(),
            },
            NewMatch {
                profile_id: "p1".to_string(),
                scholarship_id: "s2".to_string(),
                match_score: 90,
                ai_reasoning: None,
                status: "pending".to_string(),
            },
        ];
        storage.insert_matches(batch).await.unwrap();

        let matches = storage.matches_for_profile("p1").await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].match_score, 90);
        assert_eq!(matches[1].match_score, 40);
    }

    #[tokio::test]
    async fn test_matches_with_scholarships_embeds_the_record() {
        let storage = MemoryStorage::new();
        let scholarship = storage
            .create_scholarship(sample_scholarship("Tech Award"))
            .await
            .unwrap();
        storage
            .insert_matches(vec![
                NewMatch {
                    profile_id: "p1".to_string(),
                    scholarship_id: scholarship.id.clone(),
                    match_score: 80,
                    ai_reasoning: None,
                    status: "pending".to_string(),
                },
                NewMatch {
                    profile_id: "p1".to_string(),
                    scholarship_id: "gone".to_string(),
                    match_score: 30,
                    ai_reasoning: None,
                    status: "pending".to_string(),
                },
            ])
            .await
            .unwrap();

        let rows = storage.matches_with_scholarships("p1").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].scholarship.as_ref().map(|s| s.title.as_str()),
            Some("Tech Award")
        );
        assert!(rows[1].scholarship.is_none());
    }

    #[tokio::test]
    async fn test_find_guidance_returns_latest_for_pair() {
        let storage = MemoryStorage::new();
        for tip in ["first", "second"] {
            storage
                .create_guidance(NewGuidance {
                    profile_id: "p1".to_string(),
                    scholarship_id: "s1".to_string(),
                    essay_tips: vec![tip.to_string()],
                    checklist: vec!["step".to_string()],
                    improvement_suggestions: vec!["item".to_string()],
                })
                .await
                .unwrap();
        }

        let found = storage.find_guidance("p1", "s1").await.unwrap().unwrap();
        assert_eq!(found.essay_tips, vec!["second"]);
        assert!(storage.find_guidance("p1", "other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_scholarships_applies_filter() {
        let storage = MemoryStorage::new();
        storage.create_scholarship(sample_scholarship("A")).await.unwrap();
        let mut internship = sample_scholarship("B");
        internship.scholarship_type = ScholarshipType::Internship;
        storage.create_scholarship(internship).await.unwrap();

        let all = storage
            .list_scholarships(&ScholarshipFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let filter = ScholarshipFilter {
            scholarship_type: Some("internship".to_string()),
            ..Default::default()
        };
        let internships = storage.list_scholarships(&filter).await.unwrap();
        assert_eq!(internships.len(), 1);
        assert_eq!(internships[0].title, "B");
    }
}
