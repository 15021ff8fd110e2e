//! Shared types for the HR administration platform
//!
//! Common types used by the server and any future clients: the unified
//! error system, API response envelope, and pagination helpers.

pub mod error;
pub mod query;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use query::PaginatedResponse;
