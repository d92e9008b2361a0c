//! Base session store trait.
//!
//! A base store owns the session table and the id generator. Policies such
//! as expiration are layered on top by composition and write their own
//! records back through [`SessionStore::write`].

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Session, SessionId};

/// Capability interface of a session table backend.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Generate a new session id for `user_id` and record it.
    ///
    /// Implementations decide which user ids they accept; a rejected id is
    /// reported as an error and must leave the table untouched.
    async fn create(&self, user_id: Option<&str>) -> AppResult<SessionId>;

    /// Look up a session by id. Never inserts.
    async fn lookup(&self, session_id: &SessionId) -> AppResult<Option<Session>>;

    /// Insert or overwrite the entry for `session_id`.
    async fn write(&self, session_id: SessionId, session: Session) -> AppResult<()>;

    /// Copy of every entry currently in the table.
    async fn snapshot(&self) -> AppResult<Vec<(SessionId, Session)>>;

    /// Remove an entry. Returns `true` if it was present.
    async fn evict(&self, session_id: &SessionId) -> AppResult<bool>;

    /// Number of entries in the table, expired ones included.
    async fn len(&self) -> AppResult<usize>;

    /// Whether the table is empty.
    async fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len().await? == 0)
    }
}
