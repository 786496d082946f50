//! Prompt construction for the match pipeline. Pure functions — no I/O.

use std::fmt::Write;

use crate::models::profile::StudentProfile;
use crate::models::scholarship::Scholarship;

/// Builds the match-scoring prompt from one profile and the FULL candidate
/// list. Every scholarship must be scored — the prompt forbids filtering, so
/// a weak fit gets a low score rather than being dropped.
pub fn build_match_prompt(profile: &StudentProfile, scholarships: &[Scholarship]) -> String {
    let profile_json =
        serde_json::to_string_pretty(profile).unwrap_or_else(|_| "{}".to_string());

    let mut catalog = String::new();
    for s in scholarships {
        let _ = write!(
            catalog,
            "\n- Scholarship ID: {}\n- Title: {}\n- Organization: {}\n- Amount: {}\n\
             - Requirements: {}\n- Eligibility: GPA: {}, Fields: {}, Levels: {}\n- Description: {}\n",
            s.id,
            s.title,
            s.organization,
            s.amount,
            s.requirements,
            s.eligibility_gpa.as_deref().unwrap_or("any"),
            join_or_any(s.eligible_fields.as_deref()),
            join_or_any(s.eligible_levels.as_deref()),
            s.description,
        );
    }

    format!(
        "You are a helpful and detailed scholarship matching AI. Your task is to analyze \
a student's profile and match them with the most suitable scholarships from a given list.

Student Profile:
{profile_json}

List of All Available Scholarships (total {count}):
{catalog}
Instructions:
1. Carefully compare the student's profile against the eligibility and requirements of every scholarship in the list.
2. For each scholarship, assign a matchScore from 0 to 100 based on how well the student fits the criteria. A score of 100 is a perfect match.
3. Provide a concise aiReasoning that explains why the student is a good fit for that scholarship, referencing specific details from both the profile and the scholarship requirements.
4. You must return a match object for ALL available scholarships in the list. Do not filter or exclude any scholarships. If a scholarship is not a good fit, give it a low matchScore.

Return the results as a valid JSON array of objects with the keys \"scholarshipId\", \
\"matchScore\", and \"aiReasoning\". Do not include any extra text or markdown.
",
        count = scholarships.len(),
    )
}

fn join_or_any(list: Option<&[String]>) -> String {
    match list {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => "any".to_string(),
    }
}
