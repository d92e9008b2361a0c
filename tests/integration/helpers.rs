//! Shared test helpers for integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use sessionkit::{AppConfig, ManualClock, MemorySessionStore, SessionConfig, SessionContext};

/// Session context driven by a manual clock.
pub struct TestContext {
    /// Context under test
    pub ctx: SessionContext,
    /// Base store, for inspecting the raw table
    pub store: Arc<MemorySessionStore>,
    /// Clock shared with the context
    pub clock: Arc<ManualClock>,
}

impl TestContext {
    /// Create a context whose sessions last `duration_seconds`.
    pub fn new(duration_seconds: u64) -> Self {
        Self::from_config(&SessionConfig::with_duration(duration_seconds))
    }

    /// Create a context from a full session configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        let store = Arc::new(MemorySessionStore::new());
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let ctx = SessionContext::with_parts(store.clone(), clock.clone(), config);
        Self { ctx, store, clock }
    }

    /// Create a context from environment variables given as pairs.
    pub fn from_env(vars: &[(&str, &str)]) -> Self {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = AppConfig::load_with_env("tests/fixtures/missing", Some(env))
            .expect("Failed to load test config");
        Self::from_config(&config.session)
    }

    /// Log in `user_id` and return the session id as a string.
    pub async fn login(&self, user_id: &str) -> String {
        self.ctx
            .sessions()
            .create_session(Some(user_id))
            .await
            .expect("Failed to create session")
            .into_inner()
    }

    /// Resolve a session id to a user id.
    pub async fn whoami(&self, session_id: &str) -> Option<String> {
        self.ctx
            .sessions()
            .user_id_for_session_id(Some(session_id))
            .await
    }
}
