use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use callcrew::config::{AppConfig, ResponseMode, SessionBackend};
use callcrew::db;
use callcrew::handlers;
use callcrew::services::session::memory::MemorySessionStore;
use callcrew::services::session::sqlite::SqliteSessionStore;
use callcrew::services::session::{SessionLocks, SessionStore};
use callcrew::state::AppState;

// ── Helpers ──

fn test_config(mode: ResponseMode) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 8000,
        response_mode: mode,
        session_backend: SessionBackend::Memory,
        database_url: ":memory:".to_string(),
        session_idle_minutes: 30,
        session_max_turns: 50,
        session_sweep_seconds: 60,
    }
}

fn state_with(mode: ResponseMode, sessions: Box<dyn SessionStore>) -> Arc<AppState> {
    Arc::new(AppState {
        config: test_config(mode),
        sessions,
        session_locks: SessionLocks::default(),
    })
}

fn test_state() -> Arc<AppState> {
    state_with(
        ResponseMode::ContextAware,
        Box::new(MemorySessionStore::new(50)),
    )
}

fn test_app(state: Arc<AppState>) -> Router {
    handlers::router(state)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(state: &Arc<AppState>, req: Request<Body>) -> (StatusCode, Value) {
    let res = test_app(state.clone()).oneshot(req).await.unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn get(state: &Arc<AppState>, uri: &str) -> (StatusCode, Value) {
    send(
        state,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

fn steps(json: &Value) -> Vec<String> {
    serde_json::from_value(json["next_steps"].clone()).unwrap()
}

// ── Health & Catalog ──

#[tokio::test]
async fn test_health() {
    let state = test_state();
    let (status, json) = get(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_root_banner() {
    let state = test_state();
    let (status, json) = get(&state, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "running");
    assert_eq!(json["version"], "0.1.0");
}

#[tokio::test]
async fn test_services_catalog() {
    let state = test_state();
    let (status, json) = get(&state, "/api/services").await;
    assert_eq!(status, StatusCode::OK);

    let services = json["services"].as_array().unwrap();
    assert_eq!(services.len(), 5);
    assert_eq!(
        services[0],
        json!({"id": "1", "name": "Cardiology", "duration": "45 mins"})
    );
    assert_eq!(services[4]["name"], "General Consultation");
    assert_eq!(services[4]["duration"], "30 mins");
}

#[tokio::test]
async fn test_agents_listing() {
    let state = test_state();
    let (status, json) = get(&state, "/api/agents").await;
    assert_eq!(status, StatusCode::OK);

    let agents = json["agents"].as_array().unwrap();
    assert_eq!(agents.len(), 3);
    assert_eq!(agents[1]["id"], "appointment_agent");
    assert_eq!(agents[1]["role"], "Appointment Booking Specialist");
    assert_eq!(
        agents[1]["tools"],
        json!([
            {
                "name": "check_doctor_availability",
                "description": "Check doctor availability for a specific date and time"
            },
            {
                "name": "book_appointment",
                "description": "Book an appointment with a doctor"
            }
        ])
    );
}

// ── Call Processing ──

#[tokio::test]
async fn test_chest_pain_then_booking() {
    let state = test_state();

    let (status, first) = send(
        &state,
        post_json(
            "/api/call/process",
            &json!({
                "patient_name": "Maria",
                "phone_number": "+15551110000",
                "issue_type": "consultation",
                "description": "I have chest pain"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "processed");
    assert_eq!(first["specialty"], "cardiology");
    assert_eq!(first["routed_to"], "consultation_agent");
    assert!(first["call_id"].as_str().unwrap().starts_with("CALL-"));
    assert!(first["assistant_response"]
        .as_str()
        .unwrap()
        .contains("cardiologist's evaluation"));
    assert_eq!(
        steps(&first),
        vec![
            "Choose preferred appointment time",
            "Confirm specialist preference",
            "Receive appointment confirmation",
        ]
    );
    assert_eq!(
        first["conversation_context"],
        "(first message in conversation)"
    );

    let (status, second) = send(
        &state,
        post_json(
            "/api/call/process",
            &json!({
                "patient_name": "Maria",
                "phone_number": "+15551110000",
                "issue_type": "appointment",
                "description": "can I book an appointment"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["specialty"], "cardiology");
    assert!(second["assistant_response"]
        .as_str()
        .unwrap()
        .starts_with("Thank you Maria. I understand you want to book a cardiology appointment."));
    assert_ne!(first["call_id"], second["call_id"]);
}

#[tokio::test]
async fn test_first_contact_without_description() {
    let state = test_state();

    let (status, json) = send(
        &state,
        post_json(
            "/api/call/process",
            &json!({
                "patient_name": "Ana",
                "phone_number": "555-123-4567",
                "issue_type": "other"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["specialty"], "general");
    assert_eq!(
        json["assistant_response"],
        "Hello Ana! Thank you for contacting us. I'm here to help you with your medical needs. Could you tell me more about what brings you in today?"
    );
    assert_eq!(
        steps(&json),
        vec![
            "Provide more details if needed",
            "Proceed to book appointment",
            "Receive appointment confirmation",
        ]
    );
}

#[tokio::test]
async fn test_repeat_general_caller_gets_nudged() {
    let state = test_state();
    let body = json!({
        "patient_name": "Ana",
        "phone_number": "+15552220000",
        "issue_type": "other",
        "description": "hello"
    });

    for _ in 0..2 {
        send(&state, post_json("/api/call/process", &body)).await;
    }
    let (_, third) = send(&state, post_json("/api/call/process", &body)).await;
    assert!(third["assistant_response"]
        .as_str()
        .unwrap()
        .contains("I recommend booking a general consultation"));
    assert!(third["conversation_context"]
        .as_str()
        .unwrap()
        .starts_with("Previous messages in this conversation:"));
}

#[tokio::test]
async fn test_keyword_mode_has_no_context() {
    let state = state_with(
        ResponseMode::Keyword,
        Box::new(MemorySessionStore::new(50)),
    );

    let (status, json) = send(
        &state,
        post_json(
            "/api/call/process",
            &json!({
                "patient_name": "Joe",
                "phone_number": "+15553330000",
                "issue_type": "consultation",
                "description": "my knee is swollen"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["specialty"], "orthopedics");
    assert!(json.get("conversation_context").is_none());
}

#[tokio::test]
async fn test_sqlite_sessions_end_to_end() {
    let conn = db::init_db(":memory:").unwrap();
    let store = SqliteSessionStore::new(Arc::new(Mutex::new(conn)), 50);
    let state = state_with(ResponseMode::ContextAware, Box::new(store));

    let body = |description: &str| {
        json!({
            "patient_name": "Kim",
            "phone_number": "+15554440000",
            "issue_type": "consultation",
            "description": description
        })
    };

    send(&state, post_json("/api/call/process", &body("stomach pain"))).await;
    send(&state, post_json("/api/call/process", &body("still hurts"))).await;
    let (status, third) = send(&state, post_json("/api/call/process", &body("any news?"))).await;
    assert_eq!(status, StatusCode::OK);

    let context = third["conversation_context"].as_str().unwrap();
    assert!(context.contains("- Patient: stomach pain\n"));
    assert!(context.contains("- Patient: still hurts\n"));

    let history = state.sessions.history("+15554440000").await.unwrap();
    assert_eq!(history.len(), 3);
}

// ── Validation ──

#[tokio::test]
async fn test_missing_required_field_rejected() {
    let state = test_state();
    let (status, json) = send(
        &state,
        post_json(
            "/api/call/process",
            &json!({"patient_name": "Maria", "issue_type": "consultation"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("phone_number"));
}

#[tokio::test]
async fn test_unknown_issue_type_rejected() {
    let state = test_state();
    let (status, _) = send(
        &state,
        post_json(
            "/api/call/process",
            &json!({
                "patient_name": "Maria",
                "phone_number": "+15551110000",
                "issue_type": "refund"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_bad_phone_and_empty_name_rejected() {
    let state = test_state();

    let (status, json) = send(
        &state,
        post_json(
            "/api/call/process",
            &json!({
                "patient_name": "Maria",
                "phone_number": "not a number",
                "issue_type": "other"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("phone_number"));

    let (status, _) = send(
        &state,
        post_json(
            "/api/call/process",
            &json!({
                "patient_name": "",
                "phone_number": "+15551110000",
                "issue_type": "other"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Rejected calls never reach the session store
    assert!(state.sessions.history("+15551110000").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let state = test_state();
    let req = Request::builder()
        .method("POST")
        .uri("/api/call/process")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(&state, req).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].is_string());
}

// ── Dispatch ──

#[tokio::test]
async fn test_dispatch_billing_goes_to_service_info() {
    let state = test_state();
    let (status, json) = send(
        &state,
        post_json(
            "/api/call/dispatch",
            &json!({
                "patient_name": "Maria",
                "phone_number": "+15551110000",
                "issue_type": "billing"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["agent"]["id"], "service_info_agent");
    assert_eq!(json["agent"]["tools"][0]["name"], "get_service_info");
    assert_eq!(
        json["agent"]["tools"][0]["description"],
        "Get information about medical services"
    );
    assert_eq!(
        json["task"]["description"],
        "Handle general inquiry for patient: Maria"
    );
    assert_eq!(json["task"]["task_type"], "billing");
}

#[tokio::test]
async fn test_dispatch_appointment_task() {
    let state = test_state();
    let (status, json) = send(
        &state,
        post_json(
            "/api/call/dispatch",
            &json!({
                "patient_name": "Maria",
                "phone_number": "+15551110000",
                "issue_type": "appointment",
                "preferred_date": "2025-06-15"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["agent"]["id"], "appointment_agent");
    assert_eq!(
        json["task"]["description"],
        "Book appointment for patient: Maria on 2025-06-15"
    );
    assert_eq!(
        json["task"]["expected_output"],
        "Appointment confirmation with details"
    );

    // Dispatch plans without touching the session
    assert!(state.sessions.history("+15551110000").await.unwrap().is_empty());
}
