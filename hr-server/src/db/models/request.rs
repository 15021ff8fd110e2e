//! Request Model (equipment / leave / resources)

use super::serde_helpers;
use super::transfer::ApprovalStatus;
use serde::{Deserialize, Serialize};

/// Canonical request type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    Equipment,
    Leave,
    Resources,
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RequestType::Equipment => "Equipment",
            RequestType::Leave => "Leave",
            RequestType::Resources => "Resources",
        };
        write!(f, "{name}")
    }
}

/// A single request line item
///
/// Quantity is clamped to a minimum of 1 when the request is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    pub quantity: u32,
}

/// Request entity
///
/// The id carries the `REQ###` sequence and is the record key. Named
/// `HrRequest` to avoid clashing with `http::Request` in handler code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrRequest {
    #[serde(with = "serde_helpers::record_key")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RequestType,
    pub employee_id: String,
    pub description: String,
    /// Request date as `YYYY-MM-DD`
    pub request_date: String,
    pub items: Vec<RequestItem>,
    pub status: ApprovalStatus,
}

/// Create request payload; the id is generated server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreate {
    #[serde(rename = "type")]
    pub kind: RequestType,
    pub employee_id: String,
    pub description: String,
    pub request_date: String,
    #[serde(default)]
    pub items: Vec<RequestItem>,
    #[serde(default)]
    pub status: ApprovalStatus,
}

/// Update request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RequestItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApprovalStatus>,
}
