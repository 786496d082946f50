//! OpenAI backend for the suggestion boundary. Same contract as the Gemini
//! backend; the prompts themselves are provider-agnostic.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use super::{extract_json_payload, ProviderError, SuggestionProvider};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-4o";
const REQUEST_TIMEOUT_SECS: u64 = 120;

const SYSTEM_MESSAGE: &str = "You are an expert scholarship counselor who helps students \
    find the best funding opportunities. Provide accurate, helpful match scores and \
    detailed reasoning, and respond with valid JSON only.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn request(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: json!({"type": "json_object"}),
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ProviderError::EmptyContent)?;
        debug!("OpenAI call succeeded: {} chars", text.len());
        Ok(text)
    }
}

#[async_trait]
impl SuggestionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Option<String> {
        match self.request(prompt).await {
            Ok(text) => Some(extract_json_payload(&text).to_string()),
            Err(e) => {
                warn!("OpenAI API call failed: {e}");
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
