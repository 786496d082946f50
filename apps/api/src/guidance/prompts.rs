//! Prompt construction for the guidance pipeline.

use crate::models::profile::StudentProfile;
use crate::models::scholarship::Scholarship;

/// Builds the application-advice prompt for one (profile, scholarship) pair.
/// The reply must be a JSON object, not an array.
pub fn build_guidance_prompt(profile: &StudentProfile, scholarship: &Scholarship) -> String {
    let profile_json =
        serde_json::to_string_pretty(profile).unwrap_or_else(|_| "{}".to_string());
    let scholarship_json =
        serde_json::to_string_pretty(scholarship).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are an application advisor AI.
Student profile: {profile_json}
Scholarship: {scholarship_json}

Provide guidance in JSON format:
{{
  \"essayTips\": [\"tip1\", \"tip2\"],
  \"checklist\": [\"step1\", \"step2\"],
  \"improvementSuggestions\": [\"suggestion1\", \"suggestion2\"]
}}
Do not include any extra text or markdown.
"
    )
}
