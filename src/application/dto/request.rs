//! Request DTOs
//!
//! Data structures for API request parameters.

use serde::Deserialize;

use crate::domain::NewEnrollment;

/// Enrollment request parameters (`name`, `emailId`, `courseName`).
///
/// All three are required; their contents are not validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub name: String,
    pub email_id: String,
    pub course_name: String,
}

impl From<EnrollRequest> for NewEnrollment {
    fn from(request: EnrollRequest) -> Self {
        NewEnrollment {
            name: request.name,
            email_id: request.email_id,
            course_name: request.course_name,
        }
    }
}
