//! Route table. All application endpoints live under `/api`; the health
//! probe sits at the root.

mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::guidance::handlers::handle_generate_guidance;
use crate::matching::handlers::{
    handle_generate_matches, handle_list_matches, handle_update_match_status,
};
use crate::profiles::handlers::{
    handle_create_profile, handle_get_profile, handle_login, handle_register,
    handle_update_profile,
};
use crate::scholarships::handlers::handle_list_scholarships;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::handle_health))
        .route("/api/register", post(handle_register))
        .route("/api/login", post(handle_login))
        .route("/api/profile", post(handle_create_profile))
        .route(
            "/api/profile/:id",
            get(handle_get_profile).put(handle_update_profile),
        )
        .route("/api/scholarships", get(handle_list_scholarships))
        .route("/api/matches/generate", post(handle_generate_matches))
        .route("/api/matches/:profile_id", get(handle_list_matches))
        .route(
            "/api/matches/:match_id/status",
            put(handle_update_match_status),
        )
        .route("/api/guidance", post(handle_generate_guidance))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::ai::SuggestionProvider;
    use crate::config::{AiProvider, Config, StorageBackend};
    use crate::models::matching::NewMatch;
    use crate::storage::memory::MemoryStorage;
    use crate::storage::Storage;

    struct FailingProvider;

    #[async_trait]
    impl SuggestionProvider for FailingProvider {
        async fn complete(&self, _prompt: &str) -> Option<String> {
            None
        }

        fn name(&self) -> &'static str {
            "failing-stub"
        }
    }

    fn test_state(storage: Arc<MemoryStorage>) -> AppState {
        AppState {
            storage,
            ai: Arc::new(FailingProvider),
            config: Config {
                storage_backend: StorageBackend::Memory,
                database_url: None,
                ai_provider: AiProvider::Gemini,
                api_key: "test-key".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    fn put_status(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_status_update_unknown_match_is_404() {
        let app = build_router(test_state(Arc::new(MemoryStorage::new())));

        let response = app
            .oneshot(put_status("/api/matches/abc/status", r#"{"status":"favorited"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_status_is_rejected_with_400() {
        let storage = Arc::new(MemoryStorage::new());
        let created = storage
            .insert_matches(vec![NewMatch {
                profile_id: "p1".to_string(),
                scholarship_id: "s1".to_string(),
                match_score: 50,
                ai_reasoning: None,
                status: "pending".to_string(),
            }])
            .await
            .unwrap();
        let app = build_router(test_state(storage));

        let uri = format!("/api/matches/{}/status", created[0].id);
        let response = app
            .oneshot(put_status(&uri, r#"{"status":""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_status_update_existing_match_is_200() {
        let storage = Arc::new(MemoryStorage::new());
        let created = storage
            .insert_matches(vec![NewMatch {
                profile_id: "p1".to_string(),
                scholarship_id: "s1".to_string(),
                match_score: 50,
                ai_reasoning: None,
                status: "pending".to_string(),
            }])
            .await
            .unwrap();
        let app = build_router(test_state(storage.clone()));

        let uri = format!("/api/matches/{}/status", created[0].id);
        let response = app
            .oneshot(put_status(&uri, r#"{"status":"favorited"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let updated = storage
            .matches_for_profile("p1")
            .await
            .unwrap()
            .remove(0);
        assert_eq!(updated.status, "favorited");
    }
}
