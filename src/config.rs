use std::env;

/// Keeps enough turns for the three-turn conversation summary.
const MIN_SESSION_TURNS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseMode {
    /// Keyword templates plus a rendered summary of recent turns.
    ContextAware,
    /// Keyword templates only.
    Keyword,
}

impl ResponseMode {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "keyword" | "simple" => ResponseMode::Keyword,
            _ => ResponseMode::ContextAware,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionBackend {
    Memory,
    Sqlite,
}

impl SessionBackend {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => SessionBackend::Sqlite,
            _ => SessionBackend::Memory,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub response_mode: ResponseMode,
    pub session_backend: SessionBackend,
    pub database_url: String,
    pub session_idle_minutes: i64,
    pub session_max_turns: usize,
    pub session_sweep_seconds: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            response_mode: env::var("RESPONSE_MODE")
                .map(|v| ResponseMode::parse(&v))
                .unwrap_or(ResponseMode::ContextAware),
            session_backend: env::var("SESSION_STORE")
                .map(|v| SessionBackend::parse(&v))
                .unwrap_or(SessionBackend::Memory),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "callcrew.db".to_string()),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            session_max_turns: env::var("SESSION_MAX_TURNS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(50)
                .max(MIN_SESSION_TURNS),
            session_sweep_seconds: env::var("SESSION_SWEEP_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}
