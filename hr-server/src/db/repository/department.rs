//! Department Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Department, DepartmentUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const FIELDS: &str = "name, description";

#[derive(Clone)]
pub struct DepartmentRepository {
    base: BaseRepository,
}

impl DepartmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all departments ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Department>> {
        let departments: Vec<Department> = self
            .base
            .db()
            .query(format!("SELECT {FIELDS} FROM department ORDER BY name"))
            .await?
            .take(0)?;
        Ok(departments)
    }

    /// Find department by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Department>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {FIELDS} FROM department WHERE name = $name LIMIT 1"
            ))
            .bind(("name", name_owned))
            .await?;
        let departments: Vec<Department> = result.take(0)?;
        Ok(departments.into_iter().next())
    }

    /// Create a new department; the name is the record key
    pub async fn create(&self, data: Department) -> RepoResult<Department> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Department '{}' already exists",
                data.name
            )));
        }

        let name = data.name.clone();
        self.base
            .db()
            .query("CREATE type::thing('department', $name) CONTENT $data RETURN NONE")
            .bind(("name", name.clone()))
            .bind(("data", data))
            .await?;

        self.find_by_name(&name)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create department".to_string()))
    }

    /// Update a department (the name itself cannot change)
    pub async fn update(&self, name: &str, data: DepartmentUpdate) -> RepoResult<Department> {
        self.find_by_name(name)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Department '{}'", name)))?;

        self.base
            .db()
            .query("UPDATE type::thing('department', $name) MERGE $data RETURN NONE")
            .bind(("name", name.to_string()))
            .bind(("data", data))
            .await?;

        self.find_by_name(name)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Department '{}'", name)))
    }

    /// Delete a department; no-op (returns false) when the name is unknown
    ///
    /// Employees still assigned to the department keep their reference.
    pub async fn delete(&self, name: &str) -> RepoResult<bool> {
        if self.find_by_name(name).await?.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query("DELETE type::thing('department', $name)")
            .bind(("name", name.to_string()))
            .await?;
        Ok(true)
    }
}
