use axum::response::Json;
use serde_json::{json, Value};

/// GET /api/health - static liveness payload; touches nothing
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "API is up and running"
    }))
}
