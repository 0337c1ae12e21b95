//! Session manager.
//!
//! Tracks live sessions keyed by an opaque id and evicts idle ones.

use std::sync::Arc;
use std::time::Duration;

use artsel_engine::Session;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::task::JoinHandle;

/// A session together with the time it was last used.
#[derive(Debug)]
struct SessionEntry {
    session: Session,
    last_seen: DateTime<Utc>,
}

/// Manages live sessions.
///
/// Thread-safe and can be shared across handlers via `Arc`. Entries are
/// only borrowed for synchronous engine calls; never hold one across an
/// `.await`.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: DashMap<String, SessionEntry>,
}

impl SessionManager {
    /// Create a new session manager.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Create a new session manager wrapped in Arc for sharing.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a session.
    ///
    /// Returns the session ID.
    pub fn create(&self, session: Session) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();

        self.sessions.insert(
            session_id.clone(),
            SessionEntry {
                session,
                last_seen: Utc::now(),
            },
        );

        tracing::info!(session_id = %session_id, "Session created");

        session_id
    }

    /// Run `f` against a session, marking it as used.
    ///
    /// Returns `None` if the session does not exist.
    pub fn with_session<T>(&self, session_id: &str, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        let mut entry = self.sessions.get_mut(session_id)?;
        entry.last_seen = Utc::now();
        Some(f(&mut entry.session))
    }

    /// Remove a session.
    ///
    /// Returns whether it existed.
    pub fn remove(&self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id).is_some();
        if removed {
            tracing::info!(session_id = %session_id, "Session removed");
        }
        removed
    }

    /// Drop sessions not used within `ttl` of `now`.
    ///
    /// Returns the number of sessions evicted.
    pub fn evict_idle(&self, ttl: chrono::Duration, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| now - entry.last_seen <= ttl);
        let evicted = before.saturating_sub(self.sessions.len());

        if evicted > 0 {
            tracing::info!(evicted, remaining = self.sessions.len(), "Evicted idle sessions");
        }

        evicted
    }

    /// Evict idle sessions every `period` until the runtime shuts down.
    pub fn spawn_sweeper(self: &Arc<Self>, ttl: chrono::Duration, period: Duration) -> JoinHandle<()> {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                manager.evict_idle(ttl, Utc::now());
            }
        })
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if there are no live sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
