//! # sessionkit-auth
//!
//! Session stores and the expiration policy layered on top of them.
//!
//! ## Modules
//!
//! - `clock`: wall clock and a manually driven clock for tests
//! - `session`: in-memory base store, expiring store, and expired entry cleanup

pub mod clock;
pub mod session;

pub use clock::{ManualClock, SystemClock};
pub use session::{ExpirationPolicy, ExpiringSessionStore, MemorySessionStore, SessionCleanup};
