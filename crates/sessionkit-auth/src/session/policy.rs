//! Time-based session expiration policy.

use chrono::{DateTime, TimeDelta, Utc};

/// Decides whether a session created at a given instant has expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    /// `None` means sessions never expire.
    lifetime: Option<TimeDelta>,
}

impl ExpirationPolicy {
    /// Sessions never expire.
    pub fn never() -> Self {
        Self { lifetime: None }
    }

    /// Sessions expire `seconds` after creation; `0` means never.
    ///
    /// A lifetime too large to represent never elapses.
    pub fn from_seconds(seconds: u64) -> Self {
        let lifetime = i64::try_from(seconds)
            .ok()
            .filter(|secs| *secs > 0)
            .and_then(TimeDelta::try_seconds);
        Self { lifetime }
    }

    /// Whether sessions expire at all.
    pub fn expires(&self) -> bool {
        self.lifetime.is_some()
    }

    /// Configured lifetime, if any.
    pub fn lifetime(&self) -> Option<TimeDelta> {
        self.lifetime
    }

    /// Instant after which a session created at `created_at` is expired.
    pub fn expires_at(&self, created_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.lifetime
            .and_then(|lifetime| created_at.checked_add_signed(lifetime))
    }

    /// A session is expired once `now` is strictly past its expiration.
    pub fn is_expired(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.expires_at(created_at)
            .is_some_and(|expiration| now > expiration)
    }
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        Self::never()
    }
}
