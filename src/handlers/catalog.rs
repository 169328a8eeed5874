use axum::Json;
use serde_json::{json, Value};

use crate::models::SERVICE_CATALOG;
use crate::services::agents::{profile, ALL_ROLES};

// GET /api/services
pub async fn list_services() -> Json<Value> {
    Json(json!({ "services": SERVICE_CATALOG }))
}

// GET /api/agents
pub async fn list_agents() -> Json<Value> {
    let agents: Vec<_> = ALL_ROLES.iter().map(|role| profile(*role)).collect();
    Json(json!({ "agents": agents }))
}
