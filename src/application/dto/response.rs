//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::EnrollmentReceipt;
use crate::domain::{Course, Enrollment, Student};

/// Course response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub course_id: String,
    pub course_name: String,
    pub trainer: String,
    pub duration_in_week: i32,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            course_id: course.course_id,
            course_name: course.course_name,
            trainer: course.trainer,
            duration_in_week: course.duration_in_week,
        }
    }
}

/// Enrollment response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    pub id: i64,
    pub name: String,
    pub email_id: String,
    pub course_name: String,
    pub created_at: String,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id,
            name: enrollment.name,
            email_id: enrollment.email_id,
            course_name: enrollment.course_name,
            created_at: enrollment.created_at.to_rfc3339(),
        }
    }
}

/// Confirmation returned after a successful enrollment
#[derive(Debug, Serialize)]
pub struct EnrollmentConfirmationResponse {
    pub message: String,
    pub enrollment: EnrollmentResponse,
}

impl From<EnrollmentReceipt> for EnrollmentConfirmationResponse {
    fn from(receipt: EnrollmentReceipt) -> Self {
        Self {
            message: receipt.message,
            enrollment: receipt.enrollment.into(),
        }
    }
}

/// Student response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub roll_no: i64,
    pub name: String,
    pub last_name: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            roll_no: student.roll_no,
            name: student.name,
            last_name: student.last_name,
        }
    }
}
