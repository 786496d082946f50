#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student's matching input: academic record, background, and financial
/// situation. One profile per user, mutated in place on edit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub education_level: String,
    pub field_of_study: String,
    /// Free text — callers compare numerically only after parsing.
    pub gpa: Option<String>,
    pub graduation_year: String,
    pub skills: Option<String>,
    pub activities: Option<String>,
    pub financial_need: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialNeed {
    Low,
    Moderate,
    High,
    Critical,
}

impl FinancialNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialNeed::Low => "low",
            FinancialNeed::Moderate => "moderate",
            FinancialNeed::High => "high",
            FinancialNeed::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationPreference {
    Local,
    National,
    International,
    NoPreference,
}

impl LocationPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationPreference::Local => "local",
            LocationPreference::National => "national",
            LocationPreference::International => "international",
            LocationPreference::NoPreference => "no-preference",
        }
    }
}

/// Profile fields as submitted by the client. The enums reject unknown
/// tiers/preferences at the deserialization boundary (400, not a bad row).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudentProfile {
    pub name: String,
    pub email: String,
    pub education_level: String,
    pub field_of_study: String,
    #[serde(default)]
    pub gpa: Option<String>,
    pub graduation_year: String,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub activities: Option<String>,
    pub financial_need: FinancialNeed,
    pub location: LocationPreference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_need_serde_round_trip() {
        let need: FinancialNeed = serde_json::from_str(r#""critical""#).unwrap();
        assert_eq!(need, FinancialNeed::Critical);
        assert_eq!(serde_json::to_string(&need).unwrap(), r#""critical""#);
    }

    #[test]
    fn test_location_preference_kebab_case() {
        let loc: LocationPreference = serde_json::from_str(r#""no-preference""#).unwrap();
        assert_eq!(loc, LocationPreference::NoPreference);
        assert_eq!(loc.as_str(), "no-preference");
    }

    #[test]
    fn test_unknown_financial_need_is_rejected() {
        let result = serde_json::from_str::<FinancialNeed>(r#""desperate""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_profile_optional_fields_default_to_none() {
        let json = r#"{
            "name": "Jess Park",
            "email": "jess@example.com",
            "educationLevel": "undergraduate-senior",
            "fieldOfStudy": "Computer Science",
            "graduationYear": "2026",
            "financialNeed": "high",
            "location": "national"
        }"#;
        let profile: NewStudentProfile = serde_json::from_str(json).unwrap();
        assert!(profile.gpa.is_none());
        assert!(profile.skills.is_none());
        assert_eq!(profile.financial_need, FinancialNeed::High);
    }
}
