//! HR Server - employee administration backend
//!
//! # Overview
//!
//! Single-node HTTP server backed by an embedded SurrealDB store. Manages
//! accounts, departments, employees, department transfers, and equipment /
//! leave requests, and exposes a per-employee workflow history timeline.
//!
//! # Module structure
//!
//! ```text
//! hr-server/src/
//! ├── core/          # configuration, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models, repositories, seeding, id sequences
//! ├── workflow/      # workflow timeline aggregation
//! └── utils/         # logging, validation, shared error types
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;
pub mod workflow;

// Re-export public types
pub use core::{Config, Server, ServerState, build_app};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, PaginatedResponse};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging from the environment
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    __  ______     _____
   / / / / __ \   / ___/___  ______   _____  _____
  / /_/ / /_/ /   \__ \/ _ \/ ___/ | / / _ \/ ___/
 / __  / _, _/   ___/ /  __/ /   | |/ /  __/ /
/_/ /_/_/ |_|   /____/\___/_/    |___/\___/_/
    "#
    );
}
