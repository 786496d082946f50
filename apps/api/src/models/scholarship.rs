#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A fundable opportunity. Seeded in bulk, read-mostly afterwards.
/// `amount` and `deadline` are display strings, not parsed values.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub amount: String,
    pub deadline: String,
    pub description: String,
    pub requirements: String,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub scholarship_type: String,
    pub eligibility_gpa: Option<String>,
    /// None means any field of study is eligible.
    pub eligible_fields: Option<Vec<String>>,
    /// None means any education level is eligible.
    pub eligible_levels: Option<Vec<String>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScholarshipType {
    MeritBased,
    NeedBased,
    Internship,
    FieldSpecific,
}

impl ScholarshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScholarshipType::MeritBased => "merit-based",
            ScholarshipType::NeedBased => "need-based",
            ScholarshipType::Internship => "internship",
            ScholarshipType::FieldSpecific => "field-specific",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScholarship {
    pub title: String,
    pub organization: String,
    pub amount: String,
    pub deadline: String,
    pub description: String,
    pub requirements: String,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub scholarship_type: ScholarshipType,
    #[serde(default)]
    pub eligibility_gpa: Option<String>,
    #[serde(default)]
    pub eligible_fields: Option<Vec<String>>,
    #[serde(default)]
    pub eligible_levels: Option<Vec<String>>,
}

/// Optional catalog filters, bound from query parameters.
/// Absent eligibility lists on a scholarship pass every filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScholarshipFilter {
    #[serde(rename = "type")]
    pub scholarship_type: Option<String>,
    pub tag: Option<String>,
    pub field: Option<String>,
    pub level: Option<String>,
}

impl ScholarshipFilter {
    pub fn matches(&self, scholarship: &Scholarship) -> bool {
        if !scholarship.is_active {
            return false;
        }
        if let Some(wanted) = &self.scholarship_type {
            if &scholarship.scholarship_type != wanted {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !scholarship.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(field) = &self.field {
            if let Some(fields) = &scholarship.eligible_fields {
                if !fields.iter().any(|f| f == field) {
                    return false;
                }
            }
        }
        if let Some(level) = &self.level {
            if let Some(levels) = &scholarship.eligible_levels {
                if !levels.iter().any(|l| l == level) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scholarship_type: &str, tags: Vec<&str>, fields: Option<Vec<&str>>) -> Scholarship {
        Scholarship {
            id: "s1".to_string(),
            title: "Sample".to_string(),
            organization: "Org".to_string(),
            amount: "$5,000".to_string(),
            deadline: "2025-06-01".to_string(),
            description: "desc".to_string(),
            requirements: "reqs".to_string(),
            tags: tags.into_iter().map(String::from).collect(),
            scholarship_type: scholarship_type.to_string(),
            eligibility_gpa: None,
            eligible_fields: fields.map(|f| f.into_iter().map(String::from).collect()),
            eligible_levels: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_scholarship_type_serde_is_kebab_case() {
        let t: ScholarshipType = serde_json::from_str(r#""merit-based""#).unwrap();
        assert_eq!(t, ScholarshipType::MeritBased);
        assert_eq!(t.as_str(), "merit-based");
    }

    #[test]
    fn test_empty_filter_matches_active_scholarship() {
        let filter = ScholarshipFilter::default();
        assert!(filter.matches(&sample("merit-based", vec!["stem"], None)));
    }

    #[test]
    fn test_inactive_scholarship_never_matches() {
        let mut scholarship = sample("merit-based", vec![], None);
        scholarship.is_active = false;
        assert!(!ScholarshipFilter::default().matches(&scholarship));
    }

    #[test]
    fn test_type_filter() {
        let filter = ScholarshipFilter {
            scholarship_type: Some("internship".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&sample("internship", vec![], None)));
        assert!(!filter.matches(&sample("merit-based", vec![], None)));
    }

    #[test]
    fn test_missing_eligible_fields_passes_field_filter() {
        let filter = ScholarshipFilter {
            field: Some("Physics".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&sample("merit-based", vec![], None)));
        assert!(filter.matches(&sample("merit-based", vec![], Some(vec!["Physics"]))));
        assert!(!filter.matches(&sample("merit-based", vec![], Some(vec!["History"]))));
    }

    #[test]
    fn test_wire_format_uses_type_key() {
        let scholarship = sample("need-based", vec!["aid"], None);
        let json = serde_json::to_value(&scholarship).unwrap();
        assert_eq!(json["type"], "need-based");
        assert!(json.get("scholarshipType").is_none());
    }
}
