use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use rusqlite::Connection;

use super::SessionStore;
use crate::db::queries;
use crate::models::{SessionHistory, Turn};

/// Session turns kept in SQLite so they survive a restart.
pub struct SqliteSessionStore {
    db: Arc<Mutex<Connection>>,
    max_turns: usize,
}

impl SqliteSessionStore {
    pub fn new(db: Arc<Mutex<Connection>>, max_turns: usize) -> Self {
        Self { db, max_turns }
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.db
            .lock()
            .map_err(|_| anyhow::anyhow!("database lock poisoned"))
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn history(&self, phone: &str) -> anyhow::Result<SessionHistory> {
        let db = self.conn()?;
        queries::get_session_turns(&db, phone)
    }

    async fn append(&self, phone: &str, turn: Turn) -> anyhow::Result<()> {
        let now = Utc::now().naive_utc();
        let db = self.conn()?;
        queries::insert_session_turn(&db, phone, &turn, &now)?;
        let trimmed = queries::trim_session_turns(&db, phone, self.max_turns)?;
        if trimmed > 0 {
            tracing::debug!(phone, trimmed, "trimmed session history");
        }
        Ok(())
    }

    async fn evict(&self, phone: &str) -> anyhow::Result<bool> {
        let db = self.conn()?;
        queries::delete_session(&db, phone)
    }

    async fn inactive_since(&self, cutoff: NaiveDateTime) -> anyhow::Result<Vec<String>> {
        let db = self.conn()?;
        queries::inactive_session_phones(&db, &cutoff)
    }

    async fn evict_if_inactive(&self, phone: &str, cutoff: NaiveDateTime) -> anyhow::Result<bool> {
        let db = self.conn()?;
        queries::delete_session_if_inactive(&db, phone, &cutoff)
    }
}
