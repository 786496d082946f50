//! Match generation pipeline: profile → prompt → provider → normalize →
//! persist. The AI leg can fail freely; everything after it is total.

use tracing::info;

use crate::ai::SuggestionProvider;
use crate::errors::AppError;
use crate::matching::normalize::normalize_suggestions;
use crate::matching::prompts::build_match_prompt;
use crate::models::matching::{MatchStatus, NewMatch, ScholarshipMatch};
use crate::models::scholarship::ScholarshipFilter;
use crate::storage::seed::ensure_seeded;
use crate::storage::Storage;

/// Runs one generation pass for the profile identified by `profile_key`
/// (profile id or user id). Appends a fresh batch of matches; earlier
/// batches for the same profile are left untouched.
pub async fn generate_matches(
    storage: &dyn Storage,
    provider: &dyn SuggestionProvider,
    profile_key: &str,
) -> Result<Vec<ScholarshipMatch>, AppError> {
    let profile = storage
        .find_profile(profile_key)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {profile_key} not found")))?;

    ensure_seeded(storage).await?;
    let catalog = storage
        .list_scholarships(&ScholarshipFilter::default())
        .await?;

    let prompt = build_match_prompt(&profile, &catalog);
    let raw = provider.complete(&prompt).await;
    let suggestions = normalize_suggestions(raw.as_deref(), &catalog);

    if suggestions.is_empty() {
        // Only reachable with an empty catalog.
        return Ok(Vec::new());
    }

    let batch: Vec<NewMatch> = suggestions
        .into_iter()
        .map(|s| NewMatch {
            profile_id: profile.id.clone(),
            scholarship_id: s.scholarship_id,
            match_score: s.match_score,
            ai_reasoning: Some(s.ai_reasoning),
            status: MatchStatus::Pending.as_str().to_string(),
        })
        .collect();

    let matches = storage.insert_matches(batch).await?;
    info!(
        profile_id = %profile.id,
        count = matches.len(),
        "Generated scholarship matches"
    );
    Ok(matches)
}
