//! First-Run Seeding
//!
//! Fills empty tables with the fixed default records so a fresh install has
//! something to show. Each table is checked independently; tables that
//! already hold data are left untouched, so seeding is safe to run on every
//! startup.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{
    Account, AccountRole, ActiveStatus, ApprovalStatus, Department, RequestCreate, RequestItem,
    RequestType,
};
use crate::db::repository::{
    AccountRepository, DepartmentRepository, EmployeeRepository, RequestRepository,
};
use crate::utils::AppError;

fn default_accounts() -> Vec<Account> {
    vec![
        Account {
            email: "admin@example.com".to_string(),
            title: "Mr".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            role: AccountRole::Admin,
            status: ActiveStatus::Active,
        },
        Account {
            email: "employee@example.com".to_string(),
            title: "Mr".to_string(),
            first_name: "Employee".to_string(),
            last_name: "User".to_string(),
            role: AccountRole::User,
            status: ActiveStatus::Active,
        },
    ]
}

fn default_departments() -> Vec<Department> {
    vec![
        Department {
            name: "Engineering".to_string(),
            description: "Software development team".to_string(),
        },
        Department {
            name: "Marketing".to_string(),
            description: "Marketing and communications team".to_string(),
        },
        Department {
            name: "Human Resources".to_string(),
            description: "HR management and recruitment".to_string(),
        },
    ]
}

/// (id, account, position, department, hire date)
const DEFAULT_EMPLOYEES: [(&str, &str, &str, &str, &str); 2] = [
    (
        "EMP001",
        "admin@example.com",
        "Developer",
        "Engineering",
        "2025-01-01",
    ),
    (
        "EMP002",
        "employee@example.com",
        "Designer",
        "Marketing",
        "2025-02-01",
    ),
];

fn default_requests() -> Vec<RequestCreate> {
    vec![
        RequestCreate {
            kind: RequestType::Equipment,
            employee_id: "EMP002".to_string(),
            description: "Need laptop for development work".to_string(),
            request_date: "2024-03-15".to_string(),
            items: vec![RequestItem {
                name: "Laptop".to_string(),
                quantity: 1,
            }],
            status: ApprovalStatus::Pending,
        },
        RequestCreate {
            kind: RequestType::Leave,
            employee_id: "EMP001".to_string(),
            description: "Annual vacation".to_string(),
            request_date: "2024-03-10".to_string(),
            items: vec![RequestItem {
                name: "Vacation".to_string(),
                quantity: 5,
            }],
            status: ApprovalStatus::Approved,
        },
    ]
}

/// Seed default records into whichever tables are still empty
///
/// Returns true when at least one table was seeded.
pub async fn seed_if_empty(db: &Surreal<Db>) -> Result<bool, AppError> {
    let mut seeded = false;

    let accounts = AccountRepository::new(db.clone());
    if accounts
        .find_all()
        .await
        .map_err(AppError::from)?
        .is_empty()
    {
        for account in default_accounts() {
            accounts.create(account).await.map_err(AppError::from)?;
        }
        seeded = true;
    }

    let departments = DepartmentRepository::new(db.clone());
    if departments
        .find_all()
        .await
        .map_err(AppError::from)?
        .is_empty()
    {
        for department in default_departments() {
            departments
                .create(department)
                .await
                .map_err(AppError::from)?;
        }
        seeded = true;
    }

    let employees = EmployeeRepository::new(db.clone());
    if employees
        .find_all()
        .await
        .map_err(AppError::from)?
        .is_empty()
    {
        // Seed records carry fixed ids, so they bypass the sequence and are
        // written directly.
        for (id, account, position, department, hire_date) in DEFAULT_EMPLOYEES {
            db.query(
                r#"CREATE type::thing('employee', $id) SET
                    account = $account,
                    department = $department,
                    position = $position,
                    hireDate = $hire_date,
                    status = $status
                RETURN NONE"#,
            )
            .bind(("id", id.to_string()))
            .bind(("account", account.to_string()))
            .bind(("department", department.to_string()))
            .bind(("position", position.to_string()))
            .bind(("hire_date", hire_date.to_string()))
            .bind(("status", ActiveStatus::Active))
            .await
            .map_err(|e| AppError::database(format!("Failed to seed employee {id}: {e}")))?;
        }
        seeded = true;
    }

    let requests = RequestRepository::new(db.clone());
    if requests
        .find_all()
        .await
        .map_err(AppError::from)?
        .is_empty()
    {
        for request in default_requests() {
            requests.create(request).await.map_err(AppError::from)?;
        }
        seeded = true;
    }

    Ok(seeded)
}
