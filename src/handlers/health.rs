use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "AI Call Crew - Medical Call Center Assistant",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
