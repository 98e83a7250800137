//! Login sessions, held in memory only.
//!
//! A session maps an opaque bearer token to a user id. Every successful
//! validation pushes the expiry forward, so active sessions stay alive and
//! idle ones lapse. Expired entries are swept whenever a new session is
//! created.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user_id: u64,
    pub expires_at: DateTime<Utc>,
}

/// Thread-safe token registry, keyed by token.
pub struct SessionRegistry {
    entries: DashMap<String, AuthSession>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Start a session for `user_id` and return it.
    pub fn create(&self, user_id: u64) -> AuthSession {
        self.create_at(user_id, Utc::now())
    }

    fn create_at(&self, user_id: u64, now: DateTime<Utc>) -> AuthSession {
        self.purge_expired(now);

        let session = AuthSession {
            token: Uuid::new_v4().to_string(),
            user_id,
            expires_at: now + self.ttl,
        };
        self.entries.insert(session.token.clone(), session.clone());

        log::debug!("[SESSIONS] Created session for user {}", user_id);
        session
    }

    /// Look up a live session and extend its expiry.
    pub fn validate(&self, token: &str) -> Option<AuthSession> {
        self.validate_at(token, Utc::now())
    }

    fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Option<AuthSession> {
        let mut entry = self.entries.get_mut(token)?;
        if entry.expires_at <= now {
            drop(entry);
            self.entries.remove(token);
            return None;
        }
        entry.expires_at = now + self.ttl;
        Some(entry.value().clone())
    }

    /// End a session (logout). Unknown tokens are ignored.
    pub fn remove(&self, token: &str) -> bool {
        self.entries.remove(token).is_some()
    }

    fn purge_expired(&self, now: DateTime<Utc>) {
        let before = self.entries.len();
        self.entries.retain(|_, s| s.expires_at > now);
        let purged = before - self.entries.len();
        if purged > 0 {
            log::debug!("[SESSIONS] Purged {} expired sessions", purged);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
