//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity
///
/// The name is the primary key. The employee count is a derived value and is
/// never stored; see [`DepartmentWithCount`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub description: String,
}

/// Update department payload (name cannot change)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Department read model with the derived employee count
///
/// The count is recomputed from the employee collection on every read so it
/// can never drift from the stored employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentWithCount {
    pub name: String,
    pub description: String,
    pub employee_count: u64,
}

impl DepartmentWithCount {
    pub fn new(department: Department, employee_count: u64) -> Self {
        Self {
            name: department.name,
            description: department.description,
            employee_count,
        }
    }
}
