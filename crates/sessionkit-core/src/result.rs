//! Convenience result type alias for SessionKit.

use crate::error::AppError;

/// A specialized `Result` type for SessionKit operations.
pub type AppResult<T> = Result<T, AppError>;
