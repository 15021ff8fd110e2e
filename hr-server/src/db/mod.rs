//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) storage: connection setup, table
//! definitions, first-run seeding, and the repository layer.

pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;
pub mod sequence;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "hr";
const DATABASE: &str = "main";

/// Open the embedded database under `work_dir/database`
///
/// Defines the tables and lazily seeds default records into empty tables.
pub async fn open(work_dir: &str) -> Result<Surreal<Db>, AppError> {
    let path = Path::new(work_dir).join("database");
    let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

    schema::define(&db).await?;
    tracing::info!("Database tables defined");

    let seeded = seed::seed_if_empty(&db).await?;
    if seeded {
        tracing::info!("Seeded default records into empty tables");
    }

    Ok(db)
}
