//! Periodic purge of expired sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use sessionkit_core::error::AppError;

use super::expiring::ExpiringSessionStore;

/// Purges expired sessions from the table on a fixed interval.
///
/// Lookups never evict, so without this task expired entries stay in
/// memory until the process exits.
#[derive(Debug, Clone)]
pub struct SessionCleanup {
    /// Store whose expired entries are purged.
    sessions: Arc<ExpiringSessionStore>,
    /// Time between purge cycles.
    interval: Duration,
}

impl SessionCleanup {
    /// Creates a cleanup handler. Fails when `interval` is zero.
    pub fn new(sessions: Arc<ExpiringSessionStore>, interval: Duration) -> Result<Self, AppError> {
        if interval.is_zero() {
            return Err(AppError::validation("Cleanup interval must be non-zero"));
        }
        Ok(Self { sessions, interval })
    }

    /// Runs one cleanup cycle. Returns the number of sessions purged.
    pub async fn run_cleanup(&self) -> Result<usize, AppError> {
        let purged = self.sessions.purge_expired().await?;
        if purged > 0 {
            info!(purged, "Session cleanup completed");
        }
        Ok(purged)
    }

    /// Runs cleanup cycles until `cancel` turns `true` or its sender drops.
    ///
    /// The first cycle runs one full interval after start.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        info!(
            interval_seconds = self.interval.as_secs(),
            "Session cleanup started"
        );

        let mut ticker = time::interval_at(time::Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.run_cleanup().await {
                        error!(error = %e, "Session cleanup failed");
                    }
                }
            }
        }

        info!("Session cleanup stopped");
    }

    /// Spawns [`run`](Self::run) on the current tokio runtime.
    pub fn spawn(self, cancel: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(cancel).await })
    }
}
