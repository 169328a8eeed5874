pub mod memory;
pub mod sqlite;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::OwnedMutexGuard;

use crate::models::{SessionHistory, Turn};

/// Turn history per caller, keyed by phone number.
///
/// Implementations do not serialize a read followed by an append; callers
/// that need that hold the phone's guard from [`SessionLocks`].
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn history(&self, phone: &str) -> anyhow::Result<SessionHistory>;

    /// Appends a turn, dropping the oldest ones past the store's cap.
    async fn append(&self, phone: &str, turn: Turn) -> anyhow::Result<()>;

    async fn evict(&self, phone: &str) -> anyhow::Result<bool>;

    /// Phones whose last activity is before `cutoff`.
    async fn inactive_since(&self, cutoff: NaiveDateTime) -> anyhow::Result<Vec<String>>;

    /// Removes the session only if it is still idle at `cutoff`.
    async fn evict_if_inactive(&self, phone: &str, cutoff: NaiveDateTime) -> anyhow::Result<bool>;
}

/// Hands out one async lock per phone number.
#[derive(Default)]
pub struct SessionLocks {
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl SessionLocks {
    pub async fn acquire(&self, phone: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(phone.to_string()).or_default())
        };
        lock.lock_owned().await
    }

    /// The phone's guard, or `None` while a call holds it.
    pub fn try_acquire(&self, phone: &str) -> Option<OwnedMutexGuard<()>> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(phone.to_string()).or_default())
        };
        lock.try_lock_owned().ok()
    }

    /// Forgets locks nobody is holding or waiting on.
    pub fn prune(&self) -> usize {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        let before = locks.len();
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        before - locks.len()
    }

    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Drops sessions idle longer than `max_idle` along with their unused locks.
///
/// A phone whose guard is held has a call in flight and is left for the
/// next pass.
pub async fn sweep_idle(
    store: &dyn SessionStore,
    locks: &SessionLocks,
    max_idle: chrono::Duration,
) -> anyhow::Result<usize> {
    let cutoff = chrono::Utc::now().naive_utc() - max_idle;

    let mut evicted = 0;
    let mut busy = 0;
    for phone in store.inactive_since(cutoff).await? {
        let Some(_guard) = locks.try_acquire(&phone) else {
            busy += 1;
            continue;
        };
        if store.evict_if_inactive(&phone, cutoff).await? {
            evicted += 1;
        }
    }
    let pruned = locks.prune();

    if evicted > 0 || busy > 0 {
        tracing::info!(evicted, busy, pruned, "swept idle sessions");
    }
    Ok(evicted)
}
