use super::{ApiRequest, HttpMethod};
use crate::{EnrollResponse, Enrollment, MessageResponse};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EnrollInCourse {
    #[serde(skip)]
    pub course_id: String,
}

impl EnrollInCourse {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl ApiRequest for EnrollInCourse {
    type Response = EnrollResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/enrollments/courses/{}/enroll", self.course_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MyEnrollments;

impl ApiRequest for MyEnrollments {
    type Response = Vec<Enrollment>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/enrollments/my-courses".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseStudents {
    #[serde(skip)]
    pub course_id: String,
}

impl CourseStudents {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl ApiRequest for CourseStudents {
    type Response = Vec<Enrollment>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/enrollments/courses/{}/students", self.course_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Unenroll {
    #[serde(skip)]
    pub course_id: String,
}

impl Unenroll {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl ApiRequest for Unenroll {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/enrollments/courses/{}/unenroll", self.course_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProgress {
    #[serde(skip)]
    pub enrollment_id: String,
    pub progress: f64,
}

impl ApiRequest for UpdateProgress {
    type Response = Enrollment;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/enrollments/{}/progress", self.enrollment_id)
    }
}
