use crate::config::AppConfig;
use crate::services::session::{SessionLocks, SessionStore};

pub struct AppState {
    pub config: AppConfig,
    pub sessions: Box<dyn SessionStore>,
    pub session_locks: SessionLocks,
}
