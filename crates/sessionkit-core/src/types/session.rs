//! Session table entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-side record associating a session id with a user.
///
/// `created_at` is `None` only for entries recorded by a base store that
/// does not track time. The expiring store always sets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The user the session belongs to. Never mutated after creation.
    pub user_id: String,
    /// When the session was created.
    pub created_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create an entry without a creation timestamp.
    pub fn untimed(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            created_at: None,
        }
    }

    /// Create an entry stamped with `created_at`.
    pub fn new(user_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            created_at: Some(created_at),
        }
    }
}
