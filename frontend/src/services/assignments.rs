use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::web::http::Transport;
use ocms_shared::protocol::{
    AssignmentSubmissions, CourseAssignments, CreateAssignment, GetAssignment, GradeSubmission,
    MySubmissions, SubmitAssignment, ToggleAssignmentPublish, UpdateAssignment,
};
use ocms_shared::{
    Assignment, AssignmentDraft, AssignmentPatch, AssignmentPublishResponse, Submission,
    SubmissionDraft, SubmissionResponse,
};

pub struct AssignmentService<'a, T> {
    pub(super) api: &'a ApiClient<T>,
}

impl<T: Transport> AssignmentService<'_, T> {
    pub async fn create(&self, draft: AssignmentDraft) -> ApiResult<Assignment> {
        self.api.call(&CreateAssignment(draft)).await
    }

    pub async fn for_course(&self, course_id: &str) -> ApiResult<Vec<Assignment>> {
        self.api.call(&CourseAssignments::new(course_id)).await
    }

    pub async fn get(&self, assignment_id: &str) -> ApiResult<Assignment> {
        self.api.call(&GetAssignment::new(assignment_id)).await
    }

    pub async fn update(&self, assignment_id: &str, patch: AssignmentPatch) -> ApiResult<Assignment> {
        self.api
            .call(&UpdateAssignment {
                assignment_id: assignment_id.to_string(),
                patch,
            })
            .await
    }

    pub async fn toggle_publish(&self, assignment_id: &str) -> ApiResult<AssignmentPublishResponse> {
        self.api
            .call(&ToggleAssignmentPublish::new(assignment_id))
            .await
    }

    pub async fn submit(
        &self,
        assignment_id: &str,
        draft: SubmissionDraft,
    ) -> ApiResult<SubmissionResponse> {
        self.api
            .call(&SubmitAssignment {
                assignment_id: assignment_id.to_string(),
                draft,
            })
            .await
    }

    pub async fn submissions(&self, assignment_id: &str) -> ApiResult<Vec<Submission>> {
        self.api
            .call(&AssignmentSubmissions::new(assignment_id))
            .await
    }

    pub async fn grade(
        &self,
        submission_id: &str,
        grade: f64,
        feedback: &str,
    ) -> ApiResult<SubmissionResponse> {
        self.api
            .call(&GradeSubmission {
                submission_id: submission_id.to_string(),
                grade,
                feedback: feedback.to_string(),
            })
            .await
    }

    pub async fn my_submissions(&self) -> ApiResult<Vec<Submission>> {
        self.api.call(&MySubmissions).await
    }
}
