#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use chrono::NaiveDate;
use serde_json::json;

fn employee_json(id: i64, code: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": code,
        "full_name": name,
        "email": format!("{}@company.com", code.to_lowercase()),
        "department": "Engineering"
    })
}

fn attendance_json(id: i64, employee_id: i64, date: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "date": date,
        "status": status
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

#[tokio::test]
async fn employee_endpoints_succeed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200)
            .json_body(json!([employee_json(1, "EMP001", "Ada Lovelace")]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(201)
            .json_body(employee_json(2, "EMP002", "Grace Hopper"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/1");
        then.status(200)
            .json_body(employee_json(1, "EMP001", "Ada Lovelace"));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/1");
        then.status(200).json_body(json!({ "message": "deleted" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/1/attendance");
        then.status(200)
            .json_body(json!([attendance_json(5, 1, "2025-01-02", "absent")]));
    });

    let client = api_client(&server);
    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].employee_id, "EMP001");

    let created = client
        .create_employee(&NewEmployee {
            employee_id: "EMP002".into(),
            full_name: "Grace Hopper".into(),
            email: "emp002@company.com".into(),
            department: "Engineering".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 2);
    let sent = server.last_request(POST, "/api/employees").unwrap();
    assert_eq!(sent.body.unwrap()["full_name"], json!("Grace Hopper"));

    assert_eq!(client.get_employee(1).await.unwrap().full_name, "Ada Lovelace");
    client.delete_employee(1).await.unwrap();
    let history = client.list_employee_attendance(1).await.unwrap();
    assert_eq!(history[0].status, AttendanceStatus::Absent);
}

#[tokio::test]
async fn attendance_list_sends_date_only_when_filtered() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance");
        then.status(200)
            .json_body(json!([attendance_json(1, 1, "2025-01-02", "present")]));
    });
    let client = api_client(&server);

    let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    let filtered = client.list_attendance(Some(date)).await.unwrap();
    assert_eq!(filtered.len(), 1);
    let request = server.last_request(GET, "/api/attendance").unwrap();
    assert_eq!(request.query.as_deref(), Some("date=2025-01-02"));

    client.list_attendance(None).await.unwrap();
    let request = server.last_request(GET, "/api/attendance").unwrap();
    assert_eq!(request.query, None);
}

#[tokio::test]
async fn create_attendance_posts_numeric_employee_id() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance");
        then.status(201)
            .json_body(attendance_json(9, 3, "2025-02-01", "present"));
    });
    let client = api_client(&server);

    let record = client
        .create_attendance(&NewAttendanceRecord {
            employee_id: 3,
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            status: AttendanceStatus::Present,
        })
        .await
        .unwrap();
    assert_eq!(record.id, 9);

    let body = server
        .last_request(POST, "/api/attendance")
        .and_then(|req| req.body)
        .unwrap();
    assert_eq!(body, json!({ "employee_id": 3, "date": "2025-02-01", "status": "present" }));
}

#[tokio::test]
async fn dashboard_stats_are_decoded() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/stats");
        then.status(200).json_body(json!({
            "total_employees": 12,
            "total_attendance_today": 5,
            "present_today": 4,
            "absent_today": 1
        }));
    });

    let stats = api_client(&server).get_dashboard_stats().await.unwrap();
    assert_eq!(stats.total_employees, 12);
    assert_eq!(stats.total_attendance_today, 5);
    assert_eq!(stats.present_today, 4);
    assert_eq!(stats.absent_today, 1);
}

#[tokio::test]
async fn error_responses_carry_server_detail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/42");
        then.status(404)
            .json_body(json!({ "detail": "Employee not found" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(500).json_body(json!({}));
    });
    let client = api_client(&server);

    let err = client.delete_employee(42).await.unwrap_err();
    assert_eq!(err.detail(), Some("Employee not found"));
    assert_eq!(err.status(), Some(404));

    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500 });
    assert_eq!(
        err.user_message("Failed to load employees"),
        "Failed to load employees"
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({ "unexpected": true }));
    });

    let err = api_client(&server).list_employees().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
