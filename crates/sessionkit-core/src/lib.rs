//! # sessionkit-core
//!
//! Core crate for SessionKit. Contains the session store and clock traits,
//! configuration schemas, session types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SessionKit crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
