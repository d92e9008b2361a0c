//! Time source abstraction.

use chrono::{DateTime, Utc};

/// Source of the current time, read synchronously at call time.
pub trait Clock: Send + Sync + std::fmt::Debug + 'static {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
