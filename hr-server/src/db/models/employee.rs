//! Employee Model

use super::account::ActiveStatus;
use super::serde_helpers;
use serde::{Deserialize, Serialize};

/// Employee entity
///
/// The id carries the `EMP###` sequence and is the record key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(with = "serde_helpers::record_key")]
    pub id: String,
    /// Email reference to an account; at most one employee per account
    pub account: String,
    /// Name reference to a department
    pub department: String,
    pub position: String,
    /// Hire date as `YYYY-MM-DD`
    pub hire_date: String,
    pub status: ActiveStatus,
}

/// Create employee payload; the id is generated server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub account: String,
    pub department: String,
    pub position: String,
    pub hire_date: String,
    #[serde(default)]
    pub status: ActiveStatus,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActiveStatus>,
}

/// Transfer intent: move an employee to another department
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to_department: String,
}
