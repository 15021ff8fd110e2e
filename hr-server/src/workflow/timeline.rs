//! Workflow Timeline Aggregation
//!
//! Builds the per-employee workflow history: one synthetic onboarding entry
//! plus the employee's transfers and requests, mapped into a common shape
//! and sorted descending by date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::models::{ApprovalStatus, Employee, HrRequest, TransferRecord};

/// Kind of a workflow timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowKind {
    Onboarding,
    Transfer,
    Request,
}

/// One row of the workflow timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WorkflowKind,
    /// Entry date as `YYYY-MM-DD`
    pub date: String,
    /// Human-readable rendering of the entry
    pub details: String,
    pub description: String,
    pub status: ApprovalStatus,
    /// A status-change action is exposed only for transfer entries
    pub can_change_status: bool,
}

/// Build the sorted workflow timeline for one employee
///
/// Transfers and requests are filtered to the employee; the onboarding
/// entry is synthesized (status always Approved, dated `today`) and never
/// persisted. The result is sorted descending by date, parsed as
/// `YYYY-MM-DD`; unparseable dates sort last and ties keep input order.
pub fn build_timeline(
    employee: &Employee,
    today: NaiveDate,
    transfers: &[TransferRecord],
    requests: &[HrRequest],
) -> Vec<WorkflowEntry> {
    let mut entries = Vec::with_capacity(1 + transfers.len() + requests.len());

    entries.push(WorkflowEntry {
        id: "onboarding".to_string(),
        kind: WorkflowKind::Onboarding,
        date: today.format("%Y-%m-%d").to_string(),
        details: format!("OnBoarding on {}", employee.department),
        description: String::new(),
        status: ApprovalStatus::Approved,
        can_change_status: false,
    });

    for transfer in transfers.iter().filter(|t| t.employee_id == employee.id) {
        entries.push(WorkflowEntry {
            id: transfer.id.clone(),
            kind: WorkflowKind::Transfer,
            date: transfer.date.clone(),
            details: format!(
                "Employee Transferred From {} to {}",
                transfer.from_department, transfer.to_department
            ),
            description: String::new(),
            status: transfer.status,
            can_change_status: true,
        });
    }

    for request in requests.iter().filter(|r| r.employee_id == employee.id) {
        let items = request
            .items
            .iter()
            .map(|item| format!("{} x {}", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join(", ");
        entries.push(WorkflowEntry {
            id: request.id.clone(),
            kind: WorkflowKind::Request,
            date: request.request_date.clone(),
            details: format!("Requested {}: {}", request.kind, items),
            description: request.description.clone(),
            status: request.status,
            can_change_status: false,
        });
    }

    // Stable sort: ties keep the onboarding/transfer/request input order
    entries.sort_by_key(|entry| std::cmp::Reverse(parse_date(&entry.date)));
    entries
}

/// Parse an entry date; None sorts after every real date in the
/// descending timeline
fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{ActiveStatus, RequestItem, RequestType};

    fn employee() -> Employee {
        Employee {
            id: "EMP001".to_string(),
            account: "admin@example.com".to_string(),
            department: "Engineering".to_string(),
            position: "Developer".to_string(),
            hire_date: "2024-01-01".to_string(),
            status: ActiveStatus::Active,
        }
    }

    fn transfer(id: &str, employee_id: &str, date: &str) -> TransferRecord {
        TransferRecord {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            from_department: "Engineering".to_string(),
            to_department: "Marketing".to_string(),
            date: date.to_string(),
            status: ApprovalStatus::Pending,
        }
    }

    fn request(id: &str, employee_id: &str, date: &str) -> HrRequest {
        HrRequest {
            id: id.to_string(),
            kind: RequestType::Equipment,
            employee_id: employee_id.to_string(),
            description: "Need laptop for development work".to_string(),
            request_date: date.to_string(),
            items: vec![
                RequestItem {
                    name: "Laptop".to_string(),
                    quantity: 1,
                },
                RequestItem {
                    name: "Monitor".to_string(),
                    quantity: 2,
                },
            ],
            status: ApprovalStatus::Pending,
        }
    }

    #[test]
    fn test_sorted_descending_transfer_request_onboarding() {
        // transfer > request > onboarding date
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let transfers = [transfer("TRF001", "EMP001", "2024-06-01")];
        let requests = [request("REQ001", "EMP001", "2024-03-01")];

        let timeline = build_timeline(&employee(), today, &transfers, &requests);

        let kinds: Vec<WorkflowKind> = timeline.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WorkflowKind::Transfer,
                WorkflowKind::Request,
                WorkflowKind::Onboarding
            ]
        );
    }

    #[test]
    fn test_filters_other_employees() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let transfers = [
            transfer("TRF001", "EMP001", "2024-06-01"),
            transfer("TRF002", "EMP002", "2024-07-01"),
        ];
        let requests = [request("REQ001", "EMP002", "2024-03-01")];

        let timeline = build_timeline(&employee(), today, &transfers, &requests);

        assert_eq!(timeline.len(), 2);
        assert!(timeline.iter().all(|e| e.id != "TRF002" && e.id != "REQ001"));
    }

    #[test]
    fn test_onboarding_entry_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let timeline = build_timeline(&employee(), today, &[], &[]);

        assert_eq!(timeline.len(), 1);
        let onboarding = &timeline[0];
        assert_eq!(onboarding.id, "onboarding");
        assert_eq!(onboarding.date, "2024-05-20");
        assert_eq!(onboarding.details, "OnBoarding on Engineering");
        assert_eq!(onboarding.status, ApprovalStatus::Approved);
        assert!(!onboarding.can_change_status);
    }

    #[test]
    fn test_request_details_rendering() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let requests = [request("REQ001", "EMP001", "2024-03-01")];
        let timeline = build_timeline(&employee(), today, &[], &requests);

        let entry = timeline
            .iter()
            .find(|e| e.kind == WorkflowKind::Request)
            .unwrap();
        assert_eq!(entry.details, "Requested Equipment: Laptop x 1, Monitor x 2");
        assert_eq!(entry.description, "Need laptop for development work");
    }

    #[test]
    fn test_status_action_only_on_transfers() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let transfers = [transfer("TRF001", "EMP001", "2024-06-01")];
        let requests = [request("REQ001", "EMP001", "2024-03-01")];
        let timeline = build_timeline(&employee(), today, &transfers, &requests);

        for entry in timeline {
            assert_eq!(entry.can_change_status, entry.kind == WorkflowKind::Transfer);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let transfers = [transfer("TRF001", "EMP001", "2024-03-01")];
        let requests = [request("REQ001", "EMP001", "2024-03-01")];
        let timeline = build_timeline(&employee(), today, &transfers, &requests);

        let ids: Vec<&str> = timeline.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["onboarding", "TRF001", "REQ001"]);
    }

    #[test]
    fn test_unparseable_date_sorts_last() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let transfers = [transfer("TRF001", "EMP001", "not-a-date")];
        let timeline = build_timeline(&employee(), today, &transfers, &[]);

        assert_eq!(timeline.last().unwrap().id, "TRF001");
    }
}
