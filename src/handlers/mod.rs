pub mod call;
pub mod catalog;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api/call/process", post(call::process_call))
        .route("/api/call/dispatch", post(call::dispatch_call))
        .route("/api/services", get(catalog::list_services))
        .route("/api/agents", get(catalog::list_agents))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
