//! Account API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use std::collections::HashSet;

use crate::core::ServerState;
use crate::db::models::{Account, AccountCreate, AccountUpdate};
use crate::db::repository::{AccountRepository, EmployeeRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, require_field, validate_email, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// List all accounts
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Account>>> {
    let repo = AccountRepository::new(state.db.clone());
    let accounts = repo.find_all().await?;
    Ok(Json(accounts))
}

/// List accounts not yet linked to an employee
pub async fn list_available(State(state): State<ServerState>) -> AppResult<Json<Vec<Account>>> {
    let accounts = AccountRepository::new(state.db.clone()).find_all().await?;
    let employees = EmployeeRepository::new(state.db.clone()).find_all().await?;

    let assigned: HashSet<&str> = employees.iter().map(|e| e.account.as_str()).collect();
    let available = accounts
        .into_iter()
        .filter(|a| !assigned.contains(a.email.as_str()))
        .collect();
    Ok(Json(available))
}

/// Get account by email
pub async fn get_by_email(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<Account>> {
    let repo = AccountRepository::new(state.db.clone());
    let account = repo.find_by_email(&email).await?.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::AccountNotFound,
            format!("Account {email} not found"),
        )
    })?;
    Ok(Json(account))
}

/// Create a new account
///
/// The email is the record key and cannot be changed afterwards.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AccountCreate>,
) -> AppResult<Json<Account>> {
    let data = Account {
        email: require_field(payload.email, "email")?,
        title: require_field(payload.title, "title")?,
        first_name: require_field(payload.first_name, "firstName")?,
        last_name: require_field(payload.last_name, "lastName")?,
        role: require_field(payload.role, "role")?,
        status: require_field(payload.status, "status")?,
    };
    validate_email(&data.email)?;
    validate_required_text(&data.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&data.first_name, "firstName", MAX_NAME_LEN)?;
    validate_required_text(&data.last_name, "lastName", MAX_NAME_LEN)?;

    let repo = AccountRepository::new(state.db.clone());
    if repo.find_by_email(&data.email).await?.is_some() {
        return Err(AppError::with_message(
            ErrorCode::AccountEmailExists,
            format!("Account {} already exists", data.email),
        ));
    }

    let account = repo.create(data).await?;
    tracing::info!(email = %account.email, "account created");
    Ok(Json(account))
}

/// Update an account (email is immutable)
pub async fn update(
    State(state): State<ServerState>,
    Path(email): Path<String>,
    Json(payload): Json<AccountUpdate>,
) -> AppResult<Json<Account>> {
    validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.first_name, "firstName", MAX_NAME_LEN)?;
    validate_optional_text(&payload.last_name, "lastName", MAX_NAME_LEN)?;

    let repo = AccountRepository::new(state.db.clone());
    repo.find_by_email(&email).await?.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::AccountNotFound,
            format!("Account {email} not found"),
        )
    })?;

    let account = repo.update(&email, payload).await?;
    Ok(Json(account))
}

/// Delete an account; returns false when the email was unknown
pub async fn delete(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = AccountRepository::new(state.db.clone());
    let deleted = repo.delete(&email).await?;
    if deleted {
        tracing::info!(email = %email, "account deleted");
    }
    Ok(Json(deleted))
}
