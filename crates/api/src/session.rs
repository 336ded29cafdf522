//! In-memory login sessions.
//!
//! A session is created on login and keyed by the access token's `jti`. It
//! holds the signed-in user and that user's navigation state; logout drops
//! it, which invalidates the token immediately. A session lives no longer
//! than its token: expired entries are invisible to lookups and are purged
//! whenever a new session is opened.

use std::collections::HashMap;

use chrono::Utc;
use faq_core::navigation::{Intent, Navigation};
use faq_core::types::Timestamp;
use faq_core::user::User;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub navigation: Navigation,
    pub expires_at: Timestamp,
}

impl Session {
    fn is_live(&self, now: Timestamp) -> bool {
        self.expires_at > now
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `user` at the initial view, returning its id.
    pub async fn open(&self, user: User, expires_at: Timestamp) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session {
            user,
            navigation: Navigation::default(),
            expires_at,
        };

        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.is_live(now));
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!(purged, "Expired sessions purged");
        }
        sessions.insert(id, session);
        id
    }

    /// Look up a live session.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .get(&id)
            .filter(|s| s.is_live(now))
            .cloned()
    }

    /// Remove a session. Returns the removed session, if it existed.
    pub async fn close(&self, id: Uuid) -> Option<Session> {
        self.sessions.write().await.remove(&id)
    }

    /// Apply a navigation intent to the session and return the new state.
    pub async fn navigate(&self, id: Uuid, intent: Intent) -> Option<Navigation> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).filter(|s| s.is_live(now))?;
        session.navigation = session.navigation.apply(&session.user, intent);
        Some(session.navigation)
    }

    /// Number of entries held, live or not.
    #[cfg(test)]
    async fn held(&self) -> usize {
        self.sessions.read().await.len()
    }
}
