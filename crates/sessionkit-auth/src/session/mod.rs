//! Session creation, lookup with expiration, and cleanup of expired entries.

pub mod cleanup;
pub mod expiring;
pub mod policy;
pub mod store;

pub use cleanup::SessionCleanup;
pub use expiring::ExpiringSessionStore;
pub use policy::ExpirationPolicy;
pub use store::MemorySessionStore;
