//! Keyed store of live sessions for hosts that serve several conversations.
//!
//! Each session sits behind its own mutex, so submissions to one session are
//! serialised while different sessions proceed independently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use tutor_common::SessionId;

use crate::{Session, SubmitOutcome, Turn};

/// Thread-safe session store.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `session` and return its key.
    pub async fn insert(&self, session: Session) -> SessionId {
        let id = SessionId::new();
        self.sessions
            .write()
            .await
            .insert(id.clone(), Arc::new(Mutex::new(session)));
        info!(session_id = %id, "Session registered");
        id
    }

    async fn get(&self, id: &SessionId) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Submit to one session. `None` if the key is unknown.
    pub async fn submit(&self, id: &SessionId, message: impl Into<String>) -> Option<SubmitOutcome> {
        let session = self.get(id).await?;
        let mut session = session.lock().await;
        Some(session.submit(message).await)
    }

    /// Copy of one session's transcript.
    pub async fn history(&self, id: &SessionId) -> Option<Vec<Turn>> {
        let session = self.get(id).await?;
        let history = session.lock().await.history();
        Some(history)
    }

    /// Clear one session's transcript. Returns false if the key is unknown.
    pub async fn reset(&self, id: &SessionId) -> bool {
        match self.get(id).await {
            Some(session) => {
                session.lock().await.reset();
                true
            }
            None => false,
        }
    }

    /// Discard a session. Returns true if it existed.
    pub async fn remove(&self, id: &SessionId) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!(session_id = %id, "Session removed");
        }
        removed
    }

    pub async fn contains(&self, id: &SessionId) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    /// Number of live sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
