//! AI suggestion boundary — the single point of entry for generative-AI
//! calls.
//!
//! Exactly one `SuggestionProvider` backend is active per process, chosen at
//! startup via `AI_PROVIDER`. The contract at this boundary: one attempt per
//! invocation, no retry, and no error ever escapes — every provider-side
//! failure (auth, network, malformed body) is logged and collapsed to
//! `None`, which the normalizer turns into deterministic fallback output.

pub mod gemini;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned empty content")]
    EmptyContent,
}

/// Produces raw suggestion text for a prompt. Implementations absorb their
/// own failures: a `None` return is the only failure signal callers see.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Option<String>;
    fn name(&self) -> &'static str;
}

/// Pulls the JSON payload out of provider output. Models often wrap JSON in
/// markdown fences, sometimes mid-prose; take the first fenced block when
/// one exists, otherwise treat the whole reply as raw JSON text.
pub fn extract_json_payload(text: &str) -> &str {
    let text = text.trim();
    if let Some(start) = text.find("```json") {
        let rest = &text[start + "```json".len()..];
        if let Some(end) = rest.find("```") {
            return rest[..end].trim();
        }
        return rest.trim_start();
    }
    if let Some(stripped) = text.strip_prefix("```") {
        return stripped
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or_else(|| stripped.trim_start());
    }
    text
}
