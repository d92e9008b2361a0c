//! In-memory base session store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use sessionkit_core::error::AppError;
use sessionkit_core::result::AppResult;
use sessionkit_core::traits::SessionStore;
use sessionkit_core::types::{Session, SessionId};

/// Session table held in process memory.
///
/// Ids are random UUID v4 strings. Entries recorded by [`create`] carry no
/// creation time; policies layered on top overwrite them through
/// [`write`].
///
/// [`create`]: SessionStore::create
/// [`write`]: SessionStore::write
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, user_id: Option<&str>) -> AppResult<SessionId> {
        let user_id = match user_id {
            Some(id) if !id.is_empty() => id,
            Some(_) => return Err(AppError::validation("User id must not be empty")),
            None => return Err(AppError::validation("User id is required")),
        };

        let session_id = SessionId::generate();
        self.sessions
            .write()
            .await
            .insert(session_id.clone(), Session::untimed(user_id));

        debug!(session_id = %session_id, user_id, "Recorded session");
        Ok(session_id)
    }

    async fn lookup(&self, session_id: &SessionId) -> AppResult<Option<Session>> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn write(&self, session_id: SessionId, session: Session) -> AppResult<()> {
        self.sessions.write().await.insert(session_id, session);
        Ok(())
    }

    async fn snapshot(&self) -> AppResult<Vec<(SessionId, Session)>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .iter()
            .map(|(id, session)| (id.clone(), session.clone()))
            .collect())
    }

    async fn evict(&self, session_id: &SessionId) -> AppResult<bool> {
        Ok(self.sessions.write().await.remove(session_id).is_some())
    }

    async fn len(&self) -> AppResult<usize> {
        Ok(self.sessions.read().await.len())
    }
}
