//! Session store wrapper that expires sessions a fixed time after creation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use sessionkit_core::config::SessionConfig;
use sessionkit_core::result::AppResult;
use sessionkit_core::traits::{Clock, SessionStore};
use sessionkit_core::types::{Session, SessionId};

use super::policy::ExpirationPolicy;

/// Adds time-based expiration to a base session store.
///
/// Expiration is lazy: an expired session reads exactly like an unknown one
/// but stays in the table until [`purge_expired`](Self::purge_expired) runs.
/// Every failure of the public operations collapses to `None`, which callers
/// treat as "unauthenticated".
#[derive(Debug, Clone)]
pub struct ExpiringSessionStore {
    /// Base store owning the session table and id generation.
    store: Arc<dyn SessionStore>,
    /// Time source read on every create and lookup.
    clock: Arc<dyn Clock>,
    /// Session lifetime, fixed at construction.
    policy: ExpirationPolicy,
}

impl ExpiringSessionStore {
    /// Creates an expiring store with an explicit policy.
    pub fn new(
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        policy: ExpirationPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            policy,
        }
    }

    /// Creates an expiring store whose lifetime comes from `config`.
    pub fn from_config(
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        config: &SessionConfig,
    ) -> Self {
        let policy = ExpirationPolicy::from_seconds(config.duration_seconds);
        info!(
            duration_seconds = config.duration_seconds,
            expires = policy.expires(),
            "Session expiration configured"
        );
        Self::new(store, clock, policy)
    }

    /// The expiration policy in effect.
    pub fn policy(&self) -> ExpirationPolicy {
        self.policy
    }

    /// Create a session for `user_id` and return its id.
    ///
    /// The base store always gets the request, even for an absent user id.
    /// If it refuses, nothing is written and `None` is returned. If the
    /// entry cannot be stamped, it is removed again before returning `None`.
    pub async fn create_session(&self, user_id: Option<&str>) -> Option<SessionId> {
        let session_id = match self.store.create(user_id).await {
            Ok(id) => id,
            Err(e) => {
                debug!(error = %e, "Base store did not create a session");
                return None;
            }
        };

        let Some(user_id) = user_id else {
            debug!(session_id = %session_id, "Base store accepted a session without a user id");
            self.discard(&session_id).await;
            return None;
        };

        let session = Session::new(user_id, self.clock.now());
        if let Err(e) = self.store.write(session_id.clone(), session).await {
            debug!(session_id = %session_id, error = %e, "Failed to stamp session");
            self.discard(&session_id).await;
            return None;
        }

        debug!(session_id = %session_id, user_id, "Created expiring session");
        Some(session_id)
    }

    /// Remove an entry left behind by a failed creation.
    async fn discard(&self, session_id: &SessionId) {
        if let Err(e) = self.store.evict(session_id).await {
            warn!(session_id = %session_id, error = %e, "Failed to discard partial session");
        }
    }

    /// Resolve a session id to its user id, honoring expiration.
    ///
    /// Returns `None` for an absent or empty id, an unknown id, an entry
    /// without a creation time while expiration is enabled, or an expired
    /// entry. Never modifies the table.
    pub async fn user_id_for_session_id(&self, session_id: Option<&str>) -> Option<String> {
        let session_id = SessionId::from(session_id.filter(|id| !id.is_empty())?);

        let session = match self.store.lookup(&session_id).await {
            Ok(found) => found?,
            Err(e) => {
                debug!(session_id = %session_id, error = %e, "Session lookup failed");
                return None;
            }
        };

        if !self.policy.expires() {
            return Some(session.user_id);
        }

        let created_at = session.created_at?;
        if self.policy.is_expired(created_at, self.clock.now()) {
            debug!(session_id = %session_id, "Session expired");
            return None;
        }

        Some(session.user_id)
    }

    /// Remove entries that lookups already report as absent.
    ///
    /// Removes expired entries and entries without a creation time. Does
    /// nothing when sessions never expire. Returns the number removed.
    pub async fn purge_expired(&self) -> AppResult<usize> {
        if !self.policy.expires() {
            return Ok(0);
        }

        let now = self.clock.now();
        let mut purged = 0;

        for (session_id, session) in self.store.snapshot().await? {
            let stale = match session.created_at {
                Some(created_at) => self.policy.is_expired(created_at, now),
                None => true,
            };
            if stale && self.store.evict(&session_id).await? {
                purged += 1;
            }
        }

        if purged > 0 {
            debug!(purged, "Purged expired sessions");
        }

        Ok(purged)
    }
}
