//! # sessionkit
//!
//! Expiring session identifiers for session-based authentication.
//!
//! Wires the workspace crates together: loads configuration, initializes
//! logging, and builds the [`SessionContext`] that request handlers share.

pub mod context;
pub mod logging;

pub use context::SessionContext;
pub use sessionkit_auth::{
    ExpirationPolicy, ExpiringSessionStore, ManualClock, MemorySessionStore, SessionCleanup,
    SystemClock,
};
pub use sessionkit_core::config::{AppConfig, LoggingConfig, SessionConfig};
pub use sessionkit_core::traits::{Clock, SessionStore};
pub use sessionkit_core::types::{Session, SessionId};
pub use sessionkit_core::{AppError, AppResult};
