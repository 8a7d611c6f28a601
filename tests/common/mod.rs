//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use course_registration::domain::Course;
use course_registration::presentation::http::routes;
use course_registration::startup::AppState;

/// Test application over in-memory storage
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a test application with empty in-memory repositories
    pub fn new() -> Self {
        Self::with_state(AppState::in_memory())
    }

    /// Create a test application around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            router: routes::create_router(state.clone()),
            state,
        }
    }

    /// Create a test application whose catalog already holds `courses`
    pub async fn with_courses(courses: Vec<Course>) -> Self {
        let app = Self::new();
        for course in courses {
            app.state.course_service.add_course(course).await.unwrap();
        }
        app
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with no body (parameters in the query string)
    pub async fn post(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with a urlencoded form body
    pub async fn post_form(&self, uri: &str, body: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Read a response body as JSON, asserting the expected status first
pub async fn json_body(response: axum::response::Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Read a response body as text
pub async fn text_body(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Build the register URI with percent-encoded query parameters
pub fn register_uri(name: &str, email: &str, course_name: &str) -> String {
    let query = serde_urlencoded::to_string([
        ("name", name),
        ("emailId", email),
        ("courseName", course_name),
    ])
    .unwrap();
    format!("/courses/enrolled/register?{}", query)
}

/// Generate a unique test email
pub fn unique_email() -> String {
    format!("student_{}@example.com", uuid::Uuid::new_v4())
}
