mod course_tests;
mod health_tests;
mod student_tests;
