mod ai;
mod config;
mod db;
mod errors;
mod guidance;
mod matching;
mod models;
mod profiles;
mod routes;
mod scholarships;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::ai::{gemini::GeminiProvider, openai::OpenAiProvider, SuggestionProvider};
use crate::config::{AiProvider, Config, StorageBackend};
use crate::state::AppState;
use crate::storage::{memory::MemoryStorage, postgres::PgStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Tracing targets use the crate name with hyphens underscored.
    let default_filter = format!(
        "{}={}",
        env!("CARGO_PKG_NAME").replace('-', "_"),
        config.rust_log
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let storage: Arc<dyn Storage> = match config.storage_backend {
        StorageBackend::Postgres => {
            // from_env guarantees the URL is present for this backend
            let url = config.database_url.clone().unwrap_or_default();
            let pool = db::create_pool(&url).await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Using PostgreSQL storage");
            Arc::new(PgStorage::new(pool))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Arc::new(MemoryStorage::new())
        }
    };

    let ai: Arc<dyn SuggestionProvider> = match config.ai_provider {
        AiProvider::Gemini => Arc::new(GeminiProvider::new(config.api_key.clone())),
        AiProvider::OpenAi => Arc::new(OpenAiProvider::new(config.api_key.clone())),
    };
    info!(provider = ai.name(), "AI provider configured");

    let state = AppState {
        storage,
        ai,
        config: config.clone(),
    };

    let app = routes::build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
