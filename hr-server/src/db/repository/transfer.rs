//! Transfer Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{ApprovalStatus, Employee, TransferRecord};
use crate::db::sequence;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Prefix for the transfer id sequence (TRF001, TRF002, ...)
pub const ID_PREFIX: &str = "TRF";

#[derive(Clone)]
pub struct TransferRepository {
    base: BaseRepository,
}

impl TransferRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all transfer records ordered by id
    pub async fn find_all(&self) -> RepoResult<Vec<TransferRecord>> {
        let transfers: Vec<TransferRecord> = self
            .base
            .db()
            .query("SELECT * FROM transfer ORDER BY id")
            .await?
            .take(0)?;
        Ok(transfers)
    }

    /// Find transfer record by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<TransferRecord>> {
        let transfer: Option<TransferRecord> = self.base.db().select(("transfer", id)).await?;
        Ok(transfer)
    }

    /// Find all transfer records for one employee
    pub async fn find_by_employee(&self, employee_id: &str) -> RepoResult<Vec<TransferRecord>> {
        let employee_owned = employee_id.to_string();
        let transfers: Vec<TransferRecord> = self
            .base
            .db()
            .query("SELECT * FROM transfer WHERE employeeId = $employee_id ORDER BY id")
            .bind(("employee_id", employee_owned))
            .await?
            .take(0)?;
        Ok(transfers)
    }

    /// Record a transfer for an employee, dated `date`, status Pending
    ///
    /// Only writes the audit record; moving the employee is the caller's
    /// responsibility (see `EmployeeRepository::change_department`).
    pub async fn create(
        &self,
        employee: &Employee,
        to_department: &str,
        date: &str,
    ) -> RepoResult<TransferRecord> {
        let existing = self.find_all().await?;
        let id = sequence::next_in_sequence(ID_PREFIX, existing.iter().map(|t| t.id.as_str()));

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE type::thing('transfer', $id) SET
                    employeeId = $employee_id,
                    fromDepartment = $from_department,
                    toDepartment = $to_department,
                    date = $date,
                    status = $status
                RETURN AFTER"#,
            )
            .bind(("id", id))
            .bind(("employee_id", employee.id.clone()))
            .bind(("from_department", employee.department.clone()))
            .bind(("to_department", to_department.to_string()))
            .bind(("date", date.to_string()))
            .bind(("status", ApprovalStatus::Pending))
            .await?;

        let created: Option<TransferRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create transfer record".to_string()))
    }

    /// Change the approval status of a transfer record
    ///
    /// Audit only: the employee's department is never touched here, so
    /// disapproving a transfer does not move the employee back.
    pub async fn update_status(
        &self,
        id: &str,
        status: ApprovalStatus,
    ) -> RepoResult<TransferRecord> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Transfer {}", id)))?;

        let mut result = self
            .base
            .db()
            .query("UPDATE type::thing('transfer', $id) SET status = $status RETURN AFTER")
            .bind(("id", id.to_string()))
            .bind(("status", status))
            .await?;

        result
            .take::<Option<TransferRecord>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Transfer {}", id)))
    }
}
