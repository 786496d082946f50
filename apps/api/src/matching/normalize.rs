//! Match normalizer — turns raw provider output into validated suggestions.
//!
//! The provider payload is untrusted: it may be absent, malformed, the wrong
//! shape, or carry junk fields. Parse defensively into `serde_json::Value`,
//! coerce field by field, and degrade to a deterministic fallback rather
//! than surfacing an error. The caller always gets one suggestion per
//! catalog entry unless the catalog itself is empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::models::scholarship::Scholarship;

/// Fixed score assigned when automated scoring is unavailable.
pub const FALLBACK_SCORE: i32 = 50;

const DEFAULT_REASONING: &str = "No reasoning provided";

/// One validated match suggestion, ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSuggestion {
    pub scholarship_id: String,
    /// Clamped to [0, 100]; non-numeric provider scores coerce to 0.
    pub match_score: i32,
    pub ai_reasoning: String,
}

/// Normalizes raw provider output against the candidate catalog.
///
/// `None` input, unparseable text, and non-list shapes all count as "the AI
/// produced nothing" and trigger the fallback: one suggestion per scholarship
/// at `FALLBACK_SCORE` with a templated reasoning naming it. An empty catalog
/// returns an empty list — there is nothing to fabricate.
pub fn normalize_suggestions(raw: Option<&str>, catalog: &[Scholarship]) -> Vec<MatchSuggestion> {
    let suggestions: Vec<MatchSuggestion> = raw
        .map(parse_entries)
        .unwrap_or_default()
        .iter()
        .filter_map(coerce_entry)
        .collect();

    if suggestions.is_empty() && !catalog.is_empty() {
        warn!("AI returned no usable matches; falling back to default scores for all scholarships");
        return catalog
            .iter()
            .map(|s| MatchSuggestion {
                scholarship_id: s.id.clone(),
                match_score: FALLBACK_SCORE,
                ai_reasoning: format!(
                    "No AI reasoning provided. This is a default match for the scholarship titled: {}.",
                    s.title
                ),
            })
            .collect();
    }

    suggestions
}

/// Accepts a top-level JSON array, or an object wrapping the array under
/// `"matches"` (the json_object response shape). Anything else is empty.
fn parse_entries(raw: &str) -> Vec<Value> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("Failed to parse AI response as JSON: {e}");
            return Vec::new();
        }
    };

    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("matches") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Field-by-field coercion of one parsed entry. Entries without a usable
/// scholarship id are dropped; everything else gets defaults.
fn coerce_entry(entry: &Value) -> Option<MatchSuggestion> {
    let obj = entry.as_object()?;

    let scholarship_id = match obj.get("scholarshipId")? {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let match_score = obj.get("matchScore").map(coerce_score).unwrap_or(0);

    let ai_reasoning = obj
        .get("aiReasoning")
        .or_else(|| obj.get("reasoning"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_REASONING)
        .to_string();

    Some(MatchSuggestion {
        scholarship_id,
        match_score,
        ai_reasoning,
    })
}

fn coerce_score(value: &Value) -> i32 {
    let score = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    (score.round() as i64).clamp(0, 100) as i32
}
