//! Transfer Record Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};

/// Approval status for transfers and requests
///
/// Advisory only: a transfer takes effect when it is created, regardless of
/// whether it is later approved or disapproved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Disapproved,
}

/// Transfer record entity
///
/// Created when an employee changes department. The id carries the `TRF###`
/// sequence and is the record key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    #[serde(with = "serde_helpers::record_key")]
    pub id: String,
    pub employee_id: String,
    pub from_department: String,
    pub to_department: String,
    /// Transfer date as `YYYY-MM-DD`
    pub date: String,
    pub status: ApprovalStatus,
}

/// Status change payload for a transfer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: ApprovalStatus,
}
