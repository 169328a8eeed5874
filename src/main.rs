use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use callcrew::config::{AppConfig, SessionBackend};
use callcrew::db;
use callcrew::handlers;
use callcrew::services::session::memory::MemorySessionStore;
use callcrew::services::session::sqlite::SqliteSessionStore;
use callcrew::services::session::{sweep_idle, SessionLocks, SessionStore};
use callcrew::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let sessions: Box<dyn SessionStore> = match config.session_backend {
        SessionBackend::Sqlite => {
            tracing::info!("using SQLite session store (path: {})", config.database_url);
            let conn = db::init_db(&config.database_url)?;
            Box::new(SqliteSessionStore::new(
                Arc::new(Mutex::new(conn)),
                config.session_max_turns,
            ))
        }
        SessionBackend::Memory => {
            tracing::info!("using in-memory session store");
            Box::new(MemorySessionStore::new(config.session_max_turns))
        }
    };

    tracing::info!(mode = ?config.response_mode, "response mode");

    let state = Arc::new(AppState {
        config: config.clone(),
        sessions,
        session_locks: SessionLocks::default(),
    });

    let sweeper = Arc::clone(&state);
    tokio::spawn(async move {
        let max_idle = chrono::Duration::minutes(sweeper.config.session_idle_minutes);
        let mut interval =
            tokio::time::interval(Duration::from_secs(sweeper.config.session_sweep_seconds.max(1)));
        loop {
            interval.tick().await;
            if let Err(e) =
                sweep_idle(sweeper.sessions.as_ref(), &sweeper.session_locks, max_idle).await
            {
                tracing::error!(error = %e, "session sweep failed");
            }
        }
    });

    let app = handlers::router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
