use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{CallRequest, CallResponse, CrewPlan};
use crate::services::{agents, call};
use crate::state::AppState;

fn validated(payload: Result<Json<CallRequest>, JsonRejection>) -> Result<CallRequest, AppError> {
    let Json(request) = payload?;
    request.validate().map_err(AppError::Validation)?;
    Ok(request)
}

// POST /api/call/process
pub async fn process_call(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CallRequest>, JsonRejection>,
) -> Result<Json<CallResponse>, AppError> {
    let request = validated(payload)?;

    tracing::info!(phone = %request.phone_number, "incoming call");

    let response = call::process_call(&state, &request).await?;
    Ok(Json(response))
}

// POST /api/call/dispatch
pub async fn dispatch_call(
    payload: Result<Json<CallRequest>, JsonRejection>,
) -> Result<Json<CrewPlan>, AppError> {
    let request = validated(payload)?;
    let plan = agents::plan(&request);

    tracing::info!(
        phone = %request.phone_number,
        agent = plan.agent.id.as_str(),
        task_id = %plan.task.task_id,
        "dispatched call"
    );

    Ok(Json(plan))
}
