//! Shared session context handed to request handlers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use sessionkit_auth::{ExpiringSessionStore, MemorySessionStore, SessionCleanup, SystemClock};
use sessionkit_core::config::SessionConfig;
use sessionkit_core::traits::{Clock, SessionStore};

/// Owns the session table for the lifetime of the process.
///
/// Built once at startup and cloned into every handler; clones share the
/// same table.
#[derive(Debug, Clone)]
pub struct SessionContext {
    sessions: Arc<ExpiringSessionStore>,
    config: SessionConfig,
}

impl SessionContext {
    /// Build a context from the configured sources, falling back to the
    /// defaults when the configuration cannot be loaded.
    pub fn load() -> Self {
        Self::new(&SessionConfig::from_env())
    }

    /// Build a context with an in-memory table and the system clock.
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_parts(
            Arc::new(MemorySessionStore::new()),
            Arc::new(SystemClock),
            config,
        )
    }

    /// Build a context around an existing base store and clock.
    pub fn with_parts(
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        config: &SessionConfig,
    ) -> Self {
        let sessions = Arc::new(ExpiringSessionStore::from_config(store, clock, config));
        Self {
            sessions,
            config: config.clone(),
        }
    }

    /// The expiring session store.
    pub fn sessions(&self) -> &Arc<ExpiringSessionStore> {
        &self.sessions
    }

    /// The session configuration this context was built from.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Start the background purge of expired sessions.
    ///
    /// Returns `None` when `cleanup_interval_seconds` is `0` or sessions
    /// never expire. Must be called from within a tokio runtime.
    pub fn start_cleanup(&self, cancel: watch::Receiver<bool>) -> Option<JoinHandle<()>> {
        if self.config.cleanup_interval_seconds == 0 {
            return None;
        }
        if !self.sessions.policy().expires() {
            info!("Sessions never expire, cleanup not started");
            return None;
        }

        let interval = Duration::from_secs(self.config.cleanup_interval_seconds);
        match SessionCleanup::new(Arc::clone(&self.sessions), interval) {
            Ok(cleanup) => Some(cleanup.spawn(cancel)),
            Err(e) => {
                warn!(error = %e, "Session cleanup not started");
                None
            }
        }
    }
}
