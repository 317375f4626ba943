use super::{ApiRequest, HttpMethod};
use crate::{Course, CourseDraft, CoursePatch, CoursePublishResponse};
use serde::Serialize;

/// 已发布课程目录
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListCourses;

impl ApiRequest for ListCourses {
    type Response = Vec<Course>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/courses".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetCourse {
    #[serde(skip)]
    pub course_id: String,
}

impl GetCourse {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl ApiRequest for GetCourse {
    type Response = Course;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/courses/{}", self.course_id)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CreateCourse(pub CourseDraft);

impl ApiRequest for CreateCourse {
    type Response = Course;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/courses".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCourse {
    #[serde(skip)]
    pub course_id: String,
    #[serde(flatten)]
    pub patch: CoursePatch,
}

impl ApiRequest for UpdateCourse {
    type Response = Course;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/courses/{}", self.course_id)
    }
}

/// 讲师自己的课程 (含草稿，附带 studentCount)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MyCourses;

impl ApiRequest for MyCourses {
    type Response = Vec<Course>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/courses/instructor/my-courses".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleCoursePublish {
    #[serde(skip)]
    pub course_id: String,
}

impl ToggleCoursePublish {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl ApiRequest for ToggleCoursePublish {
    type Response = CoursePublishResponse;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/courses/{}/publish", self.course_id)
    }
}
