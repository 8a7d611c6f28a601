//! Student Roster API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use course_registration::domain::Student;

use crate::common::{json_body, TestApp};

#[tokio::test]
async fn test_list_students_empty() {
    let app = TestApp::new();

    let json = json_body(app.get("/api/stud").await, StatusCode::OK).await;

    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_list_students_in_roll_order() {
    let app = TestApp::new();
    for student in [Student::new(2, "Meena", "Devi"), Student::new(1, "Kavin", "Raj")] {
        app.state.student_service.add_student(student).await.unwrap();
    }

    let json = json_body(app.get("/api/stud").await, StatusCode::OK).await;

    assert_eq!(
        json,
        json!([
            {"rollNo": 1, "name": "Kavin", "lastName": "Raj"},
            {"rollNo": 2, "name": "Meena", "lastName": "Devi"}
        ])
    );
}
