//! Database Models
//!
//! One module per entity kind plus the serde helpers for SurrealDB record
//! ids. Create/update payload types live next to their entity.

pub mod account;
pub mod department;
pub mod employee;
pub mod request;
pub mod serde_helpers;
pub mod transfer;

pub use account::{Account, AccountCreate, AccountRole, AccountUpdate, ActiveStatus};
pub use department::{Department, DepartmentUpdate, DepartmentWithCount};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate, TransferRequest};
pub use request::{HrRequest, RequestCreate, RequestItem, RequestType, RequestUpdate};
pub use transfer::{ApprovalStatus, StatusChange, TransferRecord};
