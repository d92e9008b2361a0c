//! Core traits defined in `sessionkit-core` and implemented by other crates.

pub mod clock;
pub mod session_store;

pub use clock::Clock;
pub use session_store::SessionStore;
