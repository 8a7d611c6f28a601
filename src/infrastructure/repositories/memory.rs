//! In-Memory Repositories
//!
//! Implementations of the domain repository traits that keep rows in
//! process memory. They back the `memory` storage backend and the test
//! suites, and mirror the PostgreSQL behavior: primary keys are unique,
//! enrollment ids are generated by the store, and `find_all` returns rows
//! in key order.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    Course, CourseRepository, Enrollment, EnrollmentRepository, NewEnrollment, Student,
    StudentRepository,
};
use crate::shared::error::AppError;

/// In-memory course catalog keyed by course id.
#[derive(Clone, Default)]
pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<BTreeMap<String, Course>>>,
}

impl InMemoryCourseRepository {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored courses.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }

    /// Returns true when no course is stored.
    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.courses.read().await.is_empty()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn insert(&self, course: &Course) -> Result<Course, AppError> {
        let mut courses = self.courses.write().await;

        if courses.contains_key(&course.course_id) {
            return Err(AppError::Conflict(format!(
                "Course with id {} already exists",
                course.course_id
            )));
        }

        courses.insert(course.course_id.clone(), course.clone());
        Ok(course.clone())
    }

    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.read().await.values().cloned().collect())
    }
}

#[derive(Default)]
struct EnrollmentTable {
    rows: Vec<Enrollment>,
    last_id: i64,
}

/// In-memory enrollment table with a store-side id sequence.
#[derive(Clone, Default)]
pub struct InMemoryEnrollmentRepository {
    table: Arc<RwLock<EnrollmentTable>>,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored enrollments.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns true when no enrollment is stored.
    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn insert(&self, enrollment: &NewEnrollment) -> Result<Enrollment, AppError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let row = Enrollment {
            id: table.last_id,
            name: enrollment.name.clone(),
            email_id: enrollment.email_id.clone(),
            course_name: enrollment.course_name.clone(),
            created_at: Utc::now(),
        };
        table.rows.push(row.clone());

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Enrollment>, AppError> {
        Ok(self.table.read().await.rows.clone())
    }
}

/// In-memory student roster keyed by roll number.
#[derive(Clone, Default)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<BTreeMap<i64, Student>>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn insert(&self, student: &Student) -> Result<Student, AppError> {
        let mut students = self.students.write().await;

        if students.contains_key(&student.roll_no) {
            return Err(AppError::Conflict(format!(
                "Student with roll number {} already exists",
                student.roll_no
            )));
        }

        students.insert(student.roll_no, student.clone());
        Ok(student.clone())
    }

    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.students.read().await.values().cloned().collect())
    }
}
