//! Request API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{HrRequest, RequestCreate, RequestUpdate};
use crate::db::repository::{EmployeeRepository, RequestRepository};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_date, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn request_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::RequestNotFound,
        format!("Request {id} not found"),
    )
}

async fn ensure_employee_exists(state: &ServerState, id: &str) -> AppResult<()> {
    EmployeeRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::EmployeeNotFound,
                format!("Employee {id} not found"),
            )
        })?;
    Ok(())
}

/// List all requests
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<HrRequest>>> {
    let repo = RequestRepository::new(state.db.clone());
    let requests = repo.find_all().await?;
    Ok(Json(requests))
}

/// List all requests raised by one employee
pub async fn list_by_employee(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<HrRequest>>> {
    ensure_employee_exists(&state, &id).await?;

    let repo = RequestRepository::new(state.db.clone());
    let requests = repo.find_by_employee(&id).await?;
    Ok(Json(requests))
}

/// Get request by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<HrRequest>> {
    let repo = RequestRepository::new(state.db.clone());
    let request = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| request_not_found(&id))?;
    Ok(Json(request))
}

/// Create a new request with the next id in the REQ sequence
///
/// Item quantities below 1 are clamped to 1 when stored.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RequestCreate>,
) -> AppResult<Json<HrRequest>> {
    validate_required_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_date(&payload.request_date, "requestDate")?;
    for item in &payload.items {
        validate_required_text(&item.name, "item name", MAX_NAME_LEN)?;
    }
    ensure_employee_exists(&state, &payload.employee_id).await?;

    let repo = RequestRepository::new(state.db.clone());
    let request = repo.create(payload).await?;
    tracing::info!(id = %request.id, "request created");
    Ok(Json(request))
}

/// Update a request
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RequestUpdate>,
) -> AppResult<Json<HrRequest>> {
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    if let Some(ref request_date) = payload.request_date {
        validate_date(request_date, "requestDate")?;
    }
    if let Some(ref items) = payload.items {
        for item in items {
            validate_required_text(&item.name, "item name", MAX_NAME_LEN)?;
        }
    }

    let repo = RequestRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await?
        .ok_or_else(|| request_not_found(&id))?;

    let request = repo.update(&id, payload).await?;
    Ok(Json(request))
}

/// Delete a request; returns false when the id was unknown
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RequestRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;
    if deleted {
        tracing::info!(id = %id, "request deleted");
    }
    Ok(Json(deleted))
}
