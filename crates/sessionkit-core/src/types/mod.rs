//! Core type definitions used across the SessionKit workspace.

pub mod id;
pub mod session;

pub use id::SessionId;
pub use session::Session;
