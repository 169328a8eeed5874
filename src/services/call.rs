use std::sync::Arc;

use crate::config::ResponseMode;
use crate::models::{CallRequest, CallResponse, Turn};
use crate::services::agents;
use crate::services::classifier::classify_in_session;
use crate::services::responder::{build_context, generate};
use crate::state::AppState;

pub const STATUS_PROCESSED: &str = "processed";

pub async fn process_call(
    state: &Arc<AppState>,
    request: &CallRequest,
) -> anyhow::Result<CallResponse> {
    let phone = request.phone_number.trim();
    let description = request.description.as_deref();

    // Held until the turn is appended so same-caller calls cannot interleave
    let _guard = state.session_locks.acquire(phone).await;

    let history = state.sessions.history(phone).await?;

    let specialty = classify_in_session(description, &history);
    let reply = generate(&request.patient_name, description, specialty, &history);

    let conversation_context = match state.config.response_mode {
        ResponseMode::ContextAware => Some(build_context(&history)),
        ResponseMode::Keyword => None,
    };

    state
        .sessions
        .append(phone, Turn::new(description, &reply.text))
        .await?;

    let routed_to = agents::role_for(request.issue_type);

    tracing::info!(
        phone,
        issue_type = request.issue_type.as_str(),
        specialty = %specialty,
        agent = routed_to.as_str(),
        booking_intent = reply.booking_intent,
        prior_turns = history.len(),
        "processed call"
    );

    Ok(CallResponse {
        call_id: new_call_id(),
        status: STATUS_PROCESSED.to_string(),
        assistant_response: reply.text,
        next_steps: reply.next_steps,
        specialty,
        routed_to,
        conversation_context,
    })
}

fn new_call_id() -> String {
    format!("CALL-{}", uuid::Uuid::new_v4())
}
