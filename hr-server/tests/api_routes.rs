//! Route-level tests driving the full router over a seeded throwaway store
//! Run: cargo test -p hr-server --test api_routes

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hr_server::{Config, ServerState, build_app};

async fn test_app() -> (tempfile::TempDir, Router) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    (tmp, build_app(state))
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (_tmp, app) = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn accounts_listed_and_duplicates_rejected() {
    let (_tmp, app) = test_app().await;

    let (status, body) = send(&app, "GET", "/api/accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let payload = json!({
        "email": "admin@example.com",
        "title": "Mr",
        "firstName": "Admin",
        "lastName": "User",
        "role": "Admin",
        "status": "Active"
    });
    let (status, body) = send(&app, "POST", "/api/accounts", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn account_create_rejects_bad_email() {
    let (_tmp, app) = test_app().await;

    let payload = json!({
        "email": "not-an-email",
        "title": "Mr",
        "firstName": "New",
        "lastName": "User",
        "role": "User",
        "status": "Active"
    });
    let (status, body) = send(&app, "POST", "/api/accounts", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1003);
}

#[tokio::test]
async fn available_accounts_excludes_assigned() {
    let (_tmp, app) = test_app().await;

    // both seeded accounts are linked to seeded employees
    let (status, body) = send(&app, "GET", "/api/accounts/available", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    let payload = json!({
        "email": "new@example.com",
        "title": "Ms",
        "firstName": "New",
        "lastName": "Person",
        "role": "User",
        "status": "Active"
    });
    let (status, _) = send(&app, "POST", "/api/accounts", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/accounts/available", None).await;
    let available = body.as_array().unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0]["email"], "new@example.com");
}

#[tokio::test]
async fn departments_carry_derived_counts() {
    let (_tmp, app) = test_app().await;

    let (status, body) = send(&app, "GET", "/api/departments", None).await;
    assert_eq!(status, StatusCode::OK);

    let by_name: Vec<(&str, i64)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| (d["name"].as_str().unwrap(), d["employeeCount"].as_i64().unwrap()))
        .collect();
    assert!(by_name.contains(&("Engineering", 1)));
    assert!(by_name.contains(&("Marketing", 1)));
    assert!(by_name.contains(&("Human Resources", 0)));
}

#[tokio::test]
async fn recreated_department_reports_current_count() {
    let (_tmp, app) = test_app().await;

    // seeded EMP002 stays in Marketing when the department goes away
    let (status, _) = send(&app, "DELETE", "/api/departments/Marketing", None).await;
    assert_eq!(status, StatusCode::OK);

    let payload = json!({
        "name": "Marketing",
        "description": "Rebuilt marketing team"
    });
    let (status, body) = send(&app, "POST", "/api/departments", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employeeCount"], 1);

    // the create response and a fresh read must agree
    let (_, read) = send(&app, "GET", "/api/departments/Marketing", None).await;
    assert_eq!(read["employeeCount"], body["employeeCount"]);
}

#[tokio::test]
async fn account_create_missing_field_is_a_field_error() {
    let (_tmp, app) = test_app().await;

    // no role: the response is the regular error envelope, not a body rejection
    let payload = json!({
        "email": "new@example.com",
        "title": "Ms",
        "firstName": "New",
        "lastName": "Person",
        "status": "Active"
    });
    let (status, body) = send(&app, "POST", "/api/accounts", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
    assert_eq!(body["details"]["field"], "role");
}

#[tokio::test]
async fn unknown_employee_is_404_with_code() {
    let (_tmp, app) = test_app().await;

    let (status, body) = send(&app, "GET", "/api/employees/EMP999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn employee_create_requires_free_account() {
    let (_tmp, app) = test_app().await;

    // admin@example.com is already linked to EMP001
    let payload = json!({
        "account": "admin@example.com",
        "department": "Engineering",
        "position": "Tester",
        "hireDate": "2025-03-01"
    });
    let (status, body) = send(&app, "POST", "/api/employees", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3003);
}

#[tokio::test]
async fn transfer_moves_employee_and_records_it() {
    let (_tmp, app) = test_app().await;

    let payload = json!({ "toDepartment": "Human Resources" });
    let (status, body) = send(
        &app,
        "POST",
        "/api/employees/EMP001/transfer",
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "TRF001");
    assert_eq!(body["fromDepartment"], "Engineering");
    assert_eq!(body["toDepartment"], "Human Resources");
    assert_eq!(body["status"], "Pending");

    let (_, employee) = send(&app, "GET", "/api/employees/EMP001", None).await;
    assert_eq!(employee["department"], "Human Resources");

    // a second transfer to the same department is rejected
    let payload = json!({ "toDepartment": "Human Resources" });
    let (status, body) = send(
        &app,
        "POST",
        "/api/employees/EMP001/transfer",
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);
}

#[tokio::test]
async fn transfer_status_is_audit_only() {
    let (_tmp, app) = test_app().await;

    let payload = json!({ "toDepartment": "Marketing" });
    let (_, record) = send(
        &app,
        "POST",
        "/api/employees/EMP001/transfer",
        Some(payload),
    )
    .await;
    let transfer_id = record["id"].as_str().unwrap().to_string();

    let payload = json!({ "status": "Disapproved" });
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/transfers/{transfer_id}/status"),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Disapproved");

    // disapproval does not move the employee back
    let (_, employee) = send(&app, "GET", "/api/employees/EMP001", None).await;
    assert_eq!(employee["department"], "Marketing");
}

#[tokio::test]
async fn workflow_includes_onboarding_and_paginates() {
    let (_tmp, app) = test_app().await;

    // EMP001 starts with one seeded request (REQ002) plus the onboarding entry
    let (status, body) = send(&app, "GET", "/api/employees/EMP001/workflow", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["limit"], 5);
    assert_eq!(body["page"], 1);

    let entries = body["data"].as_array().unwrap();
    assert!(entries.iter().any(|e| e["type"] == "onboarding"));
    assert!(entries.iter().any(|e| e["type"] == "request"));

    // the onboarding entry is synthetic and dated today, not persisted
    let onboarding = entries.iter().find(|e| e["type"] == "onboarding").unwrap();
    assert_eq!(onboarding["status"], "Approved");
    assert_eq!(onboarding["canChangeStatus"], false);
    assert_eq!(onboarding["details"], "OnBoarding on Engineering");

    let (_, page2) = send(
        &app,
        "GET",
        "/api/employees/EMP001/workflow?page=2&limit=1",
        None,
    )
    .await;
    assert_eq!(page2["total"], 2);
    assert_eq!(page2["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn requests_filtered_by_employee() {
    let (_tmp, app) = test_app().await;

    let (status, body) = send(&app, "GET", "/api/requests/employee/EMP002", None).await;
    assert_eq!(status, StatusCode::OK);
    let requests = body.as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["id"], "REQ001");
    assert_eq!(requests[0]["type"], "Equipment");
}

#[tokio::test]
async fn request_create_validates_and_sequences() {
    let (_tmp, app) = test_app().await;

    // unknown employee
    let payload = json!({
        "type": "Leave",
        "employeeId": "EMP999",
        "description": "Time off",
        "requestDate": "2024-05-01"
    });
    let (status, body) = send(&app, "POST", "/api/requests", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);

    // bad date format
    let payload = json!({
        "type": "Leave",
        "employeeId": "EMP001",
        "description": "Time off",
        "requestDate": "01/05/2024"
    });
    let (status, _) = send(&app, "POST", "/api/requests", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // valid request continues the seeded REQ sequence
    let payload = json!({
        "type": "Resources",
        "employeeId": "EMP001",
        "description": "Access to the design archive",
        "requestDate": "2024-05-01",
        "items": [{ "name": "Archive access", "quantity": 1 }]
    });
    let (status, body) = send(&app, "POST", "/api/requests", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "REQ003");
    assert_eq!(body["status"], "Pending");
}

#[tokio::test]
async fn department_delete_is_idempotent_and_keeps_employees() {
    let (_tmp, app) = test_app().await;

    let (status, body) = send(&app, "DELETE", "/api/departments/Marketing", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(true));

    let (_, body) = send(&app, "DELETE", "/api/departments/Marketing", None).await;
    assert_eq!(body, Value::Bool(false));

    // EMP002 keeps its now-dangling department string
    let (_, employee) = send(&app, "GET", "/api/employees/EMP002", None).await;
    assert_eq!(employee["department"], "Marketing");
}
