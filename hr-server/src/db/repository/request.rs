//! Request Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{HrRequest, RequestCreate, RequestItem, RequestUpdate};
use crate::db::sequence;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Prefix for the request id sequence (REQ001, REQ002, ...)
pub const ID_PREFIX: &str = "REQ";

/// Clamp item quantities to the minimum of 1
fn clamp_quantities(items: &mut [RequestItem]) {
    for item in items {
        item.quantity = item.quantity.max(1);
    }
}

#[derive(Clone)]
pub struct RequestRepository {
    base: BaseRepository,
}

impl RequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all requests ordered by id
    pub async fn find_all(&self) -> RepoResult<Vec<HrRequest>> {
        let requests: Vec<HrRequest> = self
            .base
            .db()
            .query("SELECT * FROM request ORDER BY id")
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Find request by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<HrRequest>> {
        let request: Option<HrRequest> = self.base.db().select(("request", id)).await?;
        Ok(request)
    }

    /// Find all requests for one employee
    pub async fn find_by_employee(&self, employee_id: &str) -> RepoResult<Vec<HrRequest>> {
        let employee_owned = employee_id.to_string();
        let requests: Vec<HrRequest> = self
            .base
            .db()
            .query("SELECT * FROM request WHERE employeeId = $employee_id ORDER BY id")
            .bind(("employee_id", employee_owned))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Create a new request with the next id in the REQ sequence
    pub async fn create(&self, mut data: RequestCreate) -> RepoResult<HrRequest> {
        clamp_quantities(&mut data.items);

        let existing = self.find_all().await?;
        let id = sequence::next_in_sequence(ID_PREFIX, existing.iter().map(|r| r.id.as_str()));

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE type::thing('request', $id) SET
                    type = $kind,
                    employeeId = $employee_id,
                    description = $description,
                    requestDate = $request_date,
                    items = $items,
                    status = $status
                RETURN AFTER"#,
            )
            .bind(("id", id))
            .bind(("kind", data.kind))
            .bind(("employee_id", data.employee_id))
            .bind(("description", data.description))
            .bind(("request_date", data.request_date))
            .bind(("items", data.items))
            .bind(("status", data.status))
            .await?;

        let created: Option<HrRequest> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create request".to_string()))
    }

    /// Update a request
    pub async fn update(&self, id: &str, mut data: RequestUpdate) -> RepoResult<HrRequest> {
        if let Some(ref mut items) = data.items {
            clamp_quantities(items);
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Request {}", id)))?;

        let mut result = self
            .base
            .db()
            .query("UPDATE type::thing('request', $id) MERGE $data RETURN AFTER")
            .bind(("id", id.to_string()))
            .bind(("data", data))
            .await?;

        result
            .take::<Option<HrRequest>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Request {}", id)))
    }

    /// Delete a request; no-op (returns false) when the id is unknown
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query("DELETE type::thing('request', $id)")
            .bind(("id", id.to_string()))
            .await?;
        Ok(true)
    }
}
