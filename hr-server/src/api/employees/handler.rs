//! Employee API Handlers
//!
//! Besides plain CRUD this module hosts the two workflow endpoints:
//! `POST /{id}/transfer` moves an employee between departments and records
//! the transfer, and `GET /{id}/workflow` returns the paginated history
//! timeline.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate, TransferRecord, TransferRequest};
use crate::db::repository::{
    AccountRepository, DepartmentRepository, EmployeeRepository, RequestRepository,
    TransferRepository,
};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_date, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, PaginatedResponse};
use crate::workflow::{WorkflowEntry, build_timeline};

/// Default page size for the workflow timeline
const WORKFLOW_PAGE_SIZE: u32 = 5;

fn employee_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::EmployeeNotFound,
        format!("Employee {id} not found"),
    )
}

fn department_not_found(name: &str) -> AppError {
    AppError::with_message(
        ErrorCode::DepartmentNotFound,
        format!("Department {name} not found"),
    )
}

/// Check that the account exists and is not linked to another employee
async fn ensure_account_free(
    state: &ServerState,
    email: &str,
    exclude_employee: Option<&str>,
) -> AppResult<()> {
    AccountRepository::new(state.db.clone())
        .find_by_email(email)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::AccountNotFound,
                format!("Account {email} not found"),
            )
        })?;

    let employees = EmployeeRepository::new(state.db.clone()).find_all().await?;
    let taken = employees
        .iter()
        .any(|e| e.account == email && Some(e.id.as_str()) != exclude_employee);
    if taken {
        return Err(AppError::with_message(
            ErrorCode::AccountAlreadyAssigned,
            format!("Account {email} is already linked to an employee"),
        ));
    }
    Ok(())
}

async fn ensure_department_exists(state: &ServerState, name: &str) -> AppResult<()> {
    DepartmentRepository::new(state.db.clone())
        .find_by_name(name)
        .await?
        .ok_or_else(|| department_not_found(name))?;
    Ok(())
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// List employees of one department
pub async fn list_by_department(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    ensure_department_exists(&state, &name).await?;

    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_by_department(&name).await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| employee_not_found(&id))?;
    Ok(Json(employee))
}

/// Create a new employee with the next id in the EMP sequence
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    validate_required_text(&payload.position, "position", MAX_NAME_LEN)?;
    validate_date(&payload.hire_date, "hireDate")?;
    ensure_account_free(&state, &payload.account, None).await?;
    ensure_department_exists(&state, &payload.department).await?;

    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.create(payload).await?;
    tracing::info!(id = %employee.id, "employee created");
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    validate_optional_text(&payload.position, "position", MAX_NAME_LEN)?;
    if let Some(ref hire_date) = payload.hire_date {
        validate_date(hire_date, "hireDate")?;
    }
    if let Some(ref account) = payload.account {
        ensure_account_free(&state, account, Some(&id)).await?;
    }
    if let Some(ref department) = payload.department {
        ensure_department_exists(&state, department).await?;
    }

    let repo = EmployeeRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await?
        .ok_or_else(|| employee_not_found(&id))?;

    let employee = repo.update(&id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee; returns false when the id was unknown
///
/// Transfer and request records referencing the employee are kept.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;
    if deleted {
        tracing::info!(id = %id, "employee deleted");
    }
    Ok(Json(deleted))
}

/// Transfer an employee to another department
///
/// Records a pending transfer and moves the employee immediately; the
/// approval status on the record is advisory and never reverses the move.
pub async fn transfer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TransferRequest>,
) -> AppResult<Json<TransferRecord>> {
    let employees = EmployeeRepository::new(state.db.clone());
    let employee = employees
        .find_by_id(&id)
        .await?
        .ok_or_else(|| employee_not_found(&id))?;

    ensure_department_exists(&state, &payload.to_department).await?;
    if employee.department == payload.to_department {
        return Err(AppError::with_message(
            ErrorCode::TransferSameDepartment,
            format!("Employee {id} is already in {}", payload.to_department),
        ));
    }

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let record = TransferRepository::new(state.db.clone())
        .create(&employee, &payload.to_department, &today)
        .await?;
    employees
        .change_department(&id, &payload.to_department)
        .await?;

    tracing::info!(
        id = %record.id,
        employee = %id,
        from = %record.from_department,
        to = %record.to_department,
        "employee transferred"
    );
    Ok(Json(record))
}

/// Pagination query for the workflow timeline
#[derive(Debug, Deserialize)]
pub struct WorkflowQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    WORKFLOW_PAGE_SIZE
}

/// Get the paginated workflow timeline for an employee
pub async fn workflow(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<WorkflowQuery>,
) -> AppResult<Json<PaginatedResponse<WorkflowEntry>>> {
    let employee = EmployeeRepository::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| employee_not_found(&id))?;

    let transfers = TransferRepository::new(state.db.clone())
        .find_by_employee(&id)
        .await?;
    let requests = RequestRepository::new(state.db.clone())
        .find_by_employee(&id)
        .await?;

    let today = chrono::Local::now().date_naive();
    let entries = build_timeline(&employee, today, &transfers, &requests);

    Ok(Json(PaginatedResponse::paginate(
        entries,
        query.page,
        query.limit,
    )))
}
