use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::web::http::Transport;
use ocms_shared::protocol::{
    CreateCourse, GetCourse, ListCourses, MyCourses, ToggleCoursePublish, UpdateCourse,
};
use ocms_shared::{Course, CourseDraft, CoursePatch, CoursePublishResponse};

pub struct CourseService<'a, T> {
    pub(super) api: &'a ApiClient<T>,
}

impl<T: Transport> CourseService<'_, T> {
    /// 已发布课程
    pub async fn list(&self) -> ApiResult<Vec<Course>> {
        self.api.call(&ListCourses).await
    }

    pub async fn get(&self, course_id: &str) -> ApiResult<Course> {
        self.api.call(&GetCourse::new(course_id)).await
    }

    pub async fn create(&self, draft: CourseDraft) -> ApiResult<Course> {
        self.api.call(&CreateCourse(draft)).await
    }

    pub async fn update(&self, course_id: &str, patch: CoursePatch) -> ApiResult<Course> {
        self.api
            .call(&UpdateCourse {
                course_id: course_id.to_string(),
                patch,
            })
            .await
    }

    /// 讲师自己的课程 (含草稿)
    pub async fn mine(&self) -> ApiResult<Vec<Course>> {
        self.api.call(&MyCourses).await
    }

    pub async fn toggle_publish(&self, course_id: &str) -> ApiResult<CoursePublishResponse> {
        self.api.call(&ToggleCoursePublish::new(course_id)).await
    }
}
