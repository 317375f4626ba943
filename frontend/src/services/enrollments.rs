use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::web::http::Transport;
use ocms_shared::protocol::{
    CourseStudents, EnrollInCourse, MyEnrollments, Unenroll, UpdateProgress,
};
use ocms_shared::{EnrollResponse, Enrollment, MessageResponse};

pub struct EnrollmentService<'a, T> {
    pub(super) api: &'a ApiClient<T>,
}

impl<T: Transport> EnrollmentService<'_, T> {
    pub async fn enroll(&self, course_id: &str) -> ApiResult<EnrollResponse> {
        self.api.call(&EnrollInCourse::new(course_id)).await
    }

    pub async fn mine(&self) -> ApiResult<Vec<Enrollment>> {
        self.api.call(&MyEnrollments).await
    }

    pub async fn course_students(&self, course_id: &str) -> ApiResult<Vec<Enrollment>> {
        self.api.call(&CourseStudents::new(course_id)).await
    }

    pub async fn unenroll(&self, course_id: &str) -> ApiResult<MessageResponse> {
        self.api.call(&Unenroll::new(course_id)).await
    }

    pub async fn update_progress(&self, enrollment_id: &str, progress: f64) -> ApiResult<Enrollment> {
        self.api
            .call(&UpdateProgress {
                enrollment_id: enrollment_id.to_string(),
                progress,
            })
            .await
    }
}
