//! Department API Handlers
//!
//! Employee counts are never stored; they are derived from the employee
//! table on every read so they cannot drift.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Department, DepartmentUpdate, DepartmentWithCount, Employee};
use crate::db::repository::{DepartmentRepository, EmployeeRepository};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn count_for(employees: &[Employee], department: &str) -> u64 {
    employees.iter().filter(|e| e.department == department).count() as u64
}

fn department_not_found(name: &str) -> AppError {
    AppError::with_message(
        ErrorCode::DepartmentNotFound,
        format!("Department {name} not found"),
    )
}

/// List all departments with derived employee counts
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DepartmentWithCount>>> {
    let departments = DepartmentRepository::new(state.db.clone())
        .find_all()
        .await?;
    let employees = EmployeeRepository::new(state.db.clone()).find_all().await?;

    let result = departments
        .into_iter()
        .map(|d| {
            let count = count_for(&employees, &d.name);
            DepartmentWithCount::new(d, count)
        })
        .collect();
    Ok(Json(result))
}

/// Get department by name, with its derived employee count
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<DepartmentWithCount>> {
    let department = DepartmentRepository::new(state.db.clone())
        .find_by_name(&name)
        .await?
        .ok_or_else(|| department_not_found(&name))?;
    let employees = EmployeeRepository::new(state.db.clone()).find_all().await?;

    let count = count_for(&employees, &department.name);
    Ok(Json(DepartmentWithCount::new(department, count)))
}

/// Create a new department
///
/// The name is the record key and cannot be changed afterwards.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Department>,
) -> AppResult<Json<DepartmentWithCount>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;

    let repo = DepartmentRepository::new(state.db.clone());
    if repo.find_by_name(&payload.name).await?.is_some() {
        return Err(AppError::with_message(
            ErrorCode::DepartmentNameExists,
            format!("Department {} already exists", payload.name),
        ));
    }

    let department = repo.create(payload).await?;
    tracing::info!(name = %department.name, "department created");

    // A re-created department may already have employees pointing at its
    // name, so the count is derived here like on every other read.
    let employees = EmployeeRepository::new(state.db.clone()).find_all().await?;
    let count = count_for(&employees, &department.name);
    Ok(Json(DepartmentWithCount::new(department, count)))
}

/// Update a department description (name is immutable)
pub async fn update(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<DepartmentWithCount>> {
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;

    let repo = DepartmentRepository::new(state.db.clone());
    repo.find_by_name(&name)
        .await?
        .ok_or_else(|| department_not_found(&name))?;

    let department = repo.update(&name, payload).await?;
    let employees = EmployeeRepository::new(state.db.clone()).find_all().await?;

    let count = count_for(&employees, &department.name);
    Ok(Json(DepartmentWithCount::new(department, count)))
}

/// Delete a department; returns false when the name was unknown
///
/// Employees are not touched: records pointing at a deleted department keep
/// their department string.
pub async fn delete(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = DepartmentRepository::new(state.db.clone());
    let deleted = repo.delete(&name).await?;
    if deleted {
        tracing::info!(name = %name, "department deleted");
    }
    Ok(Json(deleted))
}
