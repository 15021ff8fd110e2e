//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::sequence;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Prefix for the employee id sequence (EMP001, EMP002, ...)
pub const ID_PREFIX: &str = "EMP";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees ordered by id
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY id")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = self.base.db().select(("employee", id)).await?;
        Ok(employee)
    }

    /// Find all employees currently in a department
    pub async fn find_by_department(&self, department: &str) -> RepoResult<Vec<Employee>> {
        let department_owned = department.to_string();
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE department = $department ORDER BY id")
            .bind(("department", department_owned))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Create a new employee with the next id in the EMP sequence
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let existing = self.find_all().await?;
        let id = sequence::next_in_sequence(ID_PREFIX, existing.iter().map(|e| e.id.as_str()));

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE type::thing('employee', $id) SET
                    account = $account,
                    department = $department,
                    position = $position,
                    hireDate = $hire_date,
                    status = $status
                RETURN AFTER"#,
            )
            .bind(("id", id))
            .bind(("account", data.account))
            .bind(("department", data.department))
            .bind(("position", data.position))
            .bind(("hire_date", data.hire_date))
            .bind(("status", data.status))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {}", id)))?;

        let mut result = self
            .base
            .db()
            .query("UPDATE type::thing('employee', $id) MERGE $data RETURN AFTER")
            .bind(("id", id.to_string()))
            .bind(("data", data))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {}", id)))
    }

    /// Move an employee into another department
    ///
    /// The move takes effect immediately; it is not contingent on any
    /// transfer approval.
    pub async fn change_department(&self, id: &str, department: &str) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query("UPDATE type::thing('employee', $id) SET department = $department RETURN AFTER")
            .bind(("id", id.to_string()))
            .bind(("department", department.to_string()))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {}", id)))
    }

    /// Delete an employee; no-op (returns false) when the id is unknown
    ///
    /// Transfer and request records referencing the employee are kept:
    /// deletion does not cascade.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query("DELETE type::thing('employee', $id)")
            .bind(("id", id.to_string()))
            .await?;
        Ok(true)
    }
}
