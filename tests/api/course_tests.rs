//! Course and Enrollment API Tests

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use course_registration::application::services::{
    CourseError, CourseService, EnrollmentReceipt, StudentServiceImpl,
};
use course_registration::domain::{Course, Enrollment, NewEnrollment};
use course_registration::infrastructure::repositories::InMemoryStudentRepository;
use course_registration::startup::AppState;

use crate::common::{json_body, register_uri, text_body, unique_email, TestApp};

#[tokio::test]
async fn test_list_courses_empty_store() {
    let app = TestApp::new();

    let json = json_body(app.get("/courses").await, StatusCode::OK).await;

    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_list_courses_returns_catalog() {
    let app = TestApp::with_courses(vec![Course::new("C1", "Full Stack Java", "R", 8)]).await;

    let json = json_body(app.get("/courses").await, StatusCode::OK).await;

    assert_eq!(
        json,
        json!([{
            "courseId": "C1",
            "courseName": "Full Stack Java",
            "trainer": "R",
            "durationInWeek": 8
        }])
    );
}

#[tokio::test]
async fn test_register_then_list_enrollments() {
    let app = TestApp::new();

    let response = app
        .post(&register_uri("Asha", "asha@example.com", "Full Stack Java"))
        .await;
    let json = json_body(response, StatusCode::CREATED).await;

    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Asha"));
    assert!(message.contains("Full Stack Java"));
    assert_eq!(json["enrollment"]["name"], "Asha");

    let enrolled = json_body(app.get("/courses/enrolled").await, StatusCode::OK).await;
    let rows = enrolled.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Asha");
    assert_eq!(rows[0]["emailId"], "asha@example.com");
    assert_eq!(rows[0]["courseName"], "Full Stack Java");
    assert_eq!(rows[0]["id"], json["enrollment"]["id"]);
}

#[tokio::test]
async fn test_identical_registrations_create_two_records() {
    let app = TestApp::new();
    let uri = register_uri("Asha", "asha@example.com", "Full Stack Java");

    let first = json_body(app.post(&uri).await, StatusCode::CREATED).await;
    let second = json_body(app.post(&uri).await, StatusCode::CREATED).await;

    assert_ne!(first["enrollment"]["id"], second["enrollment"]["id"]);
    let enrolled = json_body(app.get("/courses/enrolled").await, StatusCode::OK).await;
    assert_eq!(enrolled.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_register_course_not_in_catalog_is_accepted() {
    let app = TestApp::with_courses(vec![Course::new("C1", "Full Stack Java", "R", 8)]).await;

    let response = app
        .post(&register_uri("Ravi", &unique_email(), "Underwater Basket Weaving"))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_with_form_body() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/courses/enrolled/register",
            "name=Meena&emailId=meena%40example.com&courseName=Python",
        )
        .await;
    let json = json_body(response, StatusCode::CREATED).await;

    assert_eq!(
        json["message"],
        "Congratulation Meena Enrollment Successfully For Python"
    );
}

#[tokio::test]
async fn test_register_form_content_type_with_query_parameters() {
    let app = TestApp::new();

    let response = app
        .post_form(&register_uri("Asha", "asha@example.com", "Java"), "")
        .await;
    let json = json_body(response, StatusCode::CREATED).await;

    assert_eq!(json["enrollment"]["name"], "Asha");
    assert_eq!(json["enrollment"]["emailId"], "asha@example.com");
}

#[tokio::test]
async fn test_register_form_parameters_split_between_query_and_body() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/courses/enrolled/register?name=Asha",
            "emailId=a%40b.c&courseName=Java",
        )
        .await;
    let json = json_body(response, StatusCode::CREATED).await;

    assert_eq!(
        json["message"],
        "Congratulation Asha Enrollment Successfully For Java"
    );
    let enrolled = json_body(app.get("/courses/enrolled").await, StatusCode::OK).await;
    assert_eq!(enrolled.as_array().unwrap().len(), 1);
    assert_eq!(enrolled[0]["emailId"], "a@b.c");
}

#[tokio::test]
async fn test_register_with_json_body() {
    let app = TestApp::new();
    let body = json!({
        "name": "Kavin",
        "emailId": "kavin@example.com",
        "courseName": "MERN Stack"
    });

    let response = app
        .post_json("/courses/enrolled/register", &body.to_string())
        .await;
    let json = json_body(response, StatusCode::CREATED).await;

    assert_eq!(json["enrollment"]["courseName"], "MERN Stack");
}

#[test_case("/courses/enrolled/register?emailId=a%40b.c&courseName=Java" ; "missing name")]
#[test_case("/courses/enrolled/register?name=Asha&courseName=Java" ; "missing email")]
#[test_case("/courses/enrolled/register?name=Asha&emailId=a%40b.c" ; "missing course name")]
#[tokio::test]
async fn test_register_missing_parameter_is_bad_request(uri: &str) {
    let app = TestApp::new();

    let json = json_body(app.post(uri).await, StatusCode::BAD_REQUEST).await;

    assert_eq!(json["code"], 10002);
    let enrolled = json_body(app.get("/courses/enrolled").await, StatusCode::OK).await;
    assert_eq!(enrolled, json!([]));
}

#[tokio::test]
async fn test_register_rejects_get() {
    let app = TestApp::new();

    let response = app
        .get(&register_uri("Asha", "asha@example.com", "Java"))
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Course service whose store is always unreachable
struct UnavailableStore;

#[async_trait]
impl CourseService for UnavailableStore {
    async fn list_courses(&self) -> Result<Vec<Course>, CourseError> {
        Err(CourseError::Store("connection refused".into()))
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, CourseError> {
        Err(CourseError::Store("connection refused".into()))
    }

    async fn enroll(&self, _enrollment: NewEnrollment) -> Result<EnrollmentReceipt, CourseError> {
        Err(CourseError::Store("connection refused".into()))
    }

    async fn add_course(&self, _course: Course) -> Result<Course, CourseError> {
        Err(CourseError::Store("connection refused".into()))
    }
}

fn unavailable_app() -> TestApp {
    TestApp::with_state(AppState {
        course_service: Arc::new(UnavailableStore),
        student_service: Arc::new(StudentServiceImpl::new(Arc::new(
            InMemoryStudentRepository::new(),
        ))),
        db: None,
    })
}

#[tokio::test]
async fn test_store_failure_on_register_is_internal_error() {
    let app = unavailable_app();

    let response = app
        .post(&register_uri("Asha", "asha@example.com", "Full Stack Java"))
        .await;
    let json = json_body(response, StatusCode::INTERNAL_SERVER_ERROR).await;

    assert_eq!(json["code"], 10000);
    assert_eq!(json["message"], "Internal server error");
}

#[tokio::test]
async fn test_store_failure_on_listing_is_internal_error() {
    let app = unavailable_app();

    assert_eq!(
        app.get("/courses").await.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        app.get("/courses/enrolled").await.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/courses/unknown").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(text_body(response).await.is_empty());
}
