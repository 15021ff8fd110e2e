//! Transfer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{StatusChange, TransferRecord};
use crate::db::repository::TransferRepository;
use crate::utils::{AppError, AppResult, ErrorCode};

fn transfer_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::TransferNotFound,
        format!("Transfer {id} not found"),
    )
}

/// List all transfer records
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TransferRecord>>> {
    let repo = TransferRepository::new(state.db.clone());
    let transfers = repo.find_all().await?;
    Ok(Json(transfers))
}

/// Get transfer record by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TransferRecord>> {
    let repo = TransferRepository::new(state.db.clone());
    let transfer = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| transfer_not_found(&id))?;
    Ok(Json(transfer))
}

/// Change the approval status of a transfer record
///
/// The status is an audit flag; disapproving never moves the employee back.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusChange>,
) -> AppResult<Json<TransferRecord>> {
    let repo = TransferRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await?
        .ok_or_else(|| transfer_not_found(&id))?;

    let transfer = repo.update_status(&id, payload.status).await?;
    tracing::info!(id = %id, status = ?transfer.status, "transfer status changed");
    Ok(Json(transfer))
}
