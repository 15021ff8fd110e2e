//! Table Definitions
//!
//! Tables are SCHEMALESS: the repository layer owns the shape of each
//! record, and primary-key uniqueness comes from keying records on the
//! business identifier (email, name, EMP###, TRF###, REQ###).

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::utils::AppError;

const TABLES: [&str; 5] = ["account", "department", "employee", "transfer", "request"];

/// Define all tables (idempotent)
pub async fn define(db: &Surreal<Db>) -> Result<(), AppError> {
    for table in TABLES {
        db.query(format!("DEFINE TABLE IF NOT EXISTS {table} SCHEMALESS"))
            .await
            .map_err(|e| AppError::database(format!("Failed to define table {table}: {e}")))?;
    }
    Ok(())
}
