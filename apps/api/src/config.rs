use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing: the persisted-storage
/// variant requires `DATABASE_URL`, and the configured AI provider requires
/// its API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    /// Present whenever `storage_backend` is `Postgres`.
    pub database_url: Option<String>,
    pub ai_provider: AiProvider,
    /// API key for the configured provider.
    pub api_key: String,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiProvider {
    Gemini,
    OpenAi,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage_backend = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "postgres".to_string())
            .as_str()
        {
            "postgres" => StorageBackend::Postgres,
            "memory" => StorageBackend::Memory,
            other => bail!("Unknown STORAGE_BACKEND '{other}' (expected 'postgres' or 'memory')"),
        };

        let database_url = match storage_backend {
            StorageBackend::Postgres => Some(require_env("DATABASE_URL")?),
            StorageBackend::Memory => std::env::var("DATABASE_URL").ok(),
        };

        let ai_provider = match std::env::var("AI_PROVIDER")
            .unwrap_or_else(|_| "gemini".to_string())
            .as_str()
        {
            "gemini" => AiProvider::Gemini,
            "openai" => AiProvider::OpenAi,
            other => bail!("Unknown AI_PROVIDER '{other}' (expected 'gemini' or 'openai')"),
        };

        let api_key = match ai_provider {
            AiProvider::Gemini => require_env("GEMINI_API_KEY")?,
            AiProvider::OpenAi => require_env("OPENAI_API_KEY")?,
        };

        Ok(Config {
            storage_backend,
            database_url,
            ai_provider,
            api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
