use axum::Json;
use serde_json::{json, Value};

/// GET /health
pub async fn handle_health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "scholarmatch-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
