use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One exchange: what the caller said and what we answered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub user: Option<String>,
    pub agent: String,
}

impl Turn {
    pub fn new(user: Option<&str>, agent: &str) -> Self {
        Self {
            user: user.map(|s| s.to_string()),
            agent: agent.to_string(),
        }
    }
}

/// Ordered turns of a single caller's session, oldest first.
pub type SessionHistory = Vec<Turn>;

#[derive(Debug, Clone)]
pub struct Session {
    pub phone: String,
    pub turns: SessionHistory,
    pub last_activity: NaiveDateTime,
}
