use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};

use super::SessionStore;
use crate::models::{Session, SessionHistory, Turn};

pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    max_turns: usize,
}

impl MemorySessionStore {
    pub fn new(max_turns: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            max_turns,
        }
    }

    fn sessions(&self) -> anyhow::Result<MutexGuard<'_, HashMap<String, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn history(&self, phone: &str) -> anyhow::Result<SessionHistory> {
        Ok(self
            .sessions()?
            .get(phone)
            .map(|s| s.turns.clone())
            .unwrap_or_default())
    }

    async fn append(&self, phone: &str, turn: Turn) -> anyhow::Result<()> {
        let now = Utc::now().naive_utc();
        let mut sessions = self.sessions()?;
        let session = sessions.entry(phone.to_string()).or_insert_with(|| Session {
            phone: phone.to_string(),
            turns: Vec::new(),
            last_activity: now,
        });

        session.turns.push(turn);
        if session.turns.len() > self.max_turns {
            let excess = session.turns.len() - self.max_turns;
            session.turns.drain(..excess);
        }
        session.last_activity = now;
        Ok(())
    }

    async fn evict(&self, phone: &str) -> anyhow::Result<bool> {
        Ok(self.sessions()?.remove(phone).is_some())
    }

    async fn inactive_since(&self, cutoff: NaiveDateTime) -> anyhow::Result<Vec<String>> {
        Ok(self
            .sessions()?
            .values()
            .filter(|s| s.last_activity < cutoff)
            .map(|s| s.phone.clone())
            .collect())
    }

    async fn evict_if_inactive(&self, phone: &str, cutoff: NaiveDateTime) -> anyhow::Result<bool> {
        let mut sessions = self.sessions()?;
        match sessions.get(phone) {
            Some(session) if session.last_activity < cutoff => {
                sessions.remove(phone);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
