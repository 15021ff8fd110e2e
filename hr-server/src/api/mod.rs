//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`accounts`] - account management
//! - [`departments`] - department management
//! - [`employees`] - employee management, transfers, workflow history
//! - [`transfers`] - transfer records and approval status
//! - [`requests`] - equipment / leave / resources requests

pub mod accounts;
pub mod departments;
pub mod employees;
pub mod health;
pub mod requests;
pub mod transfers;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
