//! Shared utilities: error types, logging, validation helpers

pub mod logger;
pub mod validation;

// Re-export the unified error types so handlers and repositories can use
// `crate::utils::AppError` without reaching into the shared crate directly.
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, PaginatedResponse};
