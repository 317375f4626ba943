use super::{ApiRequest, HttpMethod};
use crate::{
    Assignment, AssignmentDraft, AssignmentPatch, AssignmentPublishResponse, Submission,
    SubmissionDraft, SubmissionResponse,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CreateAssignment(pub AssignmentDraft);

impl ApiRequest for CreateAssignment {
    type Response = Assignment;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/assignments".into()
    }
}

/// 课程下的作业 (学生只会拿到已发布的)
#[derive(Debug, Clone, Serialize)]
pub struct CourseAssignments {
    #[serde(skip)]
    pub course_id: String,
}

impl CourseAssignments {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl ApiRequest for CourseAssignments {
    type Response = Vec<Assignment>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/assignments/course/{}", self.course_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetAssignment {
    #[serde(skip)]
    pub assignment_id: String,
}

impl GetAssignment {
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: assignment_id.into(),
        }
    }
}

impl ApiRequest for GetAssignment {
    type Response = Assignment;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/assignments/{}", self.assignment_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateAssignment {
    #[serde(skip)]
    pub assignment_id: String,
    #[serde(flatten)]
    pub patch: AssignmentPatch,
}

impl ApiRequest for UpdateAssignment {
    type Response = Assignment;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/assignments/{}", self.assignment_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleAssignmentPublish {
    #[serde(skip)]
    pub assignment_id: String,
}

impl ToggleAssignmentPublish {
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: assignment_id.into(),
        }
    }
}

impl ApiRequest for ToggleAssignmentPublish {
    type Response = AssignmentPublishResponse;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/assignments/{}/publish", self.assignment_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAssignment {
    #[serde(skip)]
    pub assignment_id: String,
    #[serde(flatten)]
    pub draft: SubmissionDraft,
}

impl ApiRequest for SubmitAssignment {
    type Response = SubmissionResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/assignments/{}/submit", self.assignment_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentSubmissions {
    #[serde(skip)]
    pub assignment_id: String,
}

impl AssignmentSubmissions {
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: assignment_id.into(),
        }
    }
}

impl ApiRequest for AssignmentSubmissions {
    type Response = Vec<Submission>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/assignments/{}/submissions", self.assignment_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeSubmission {
    #[serde(skip)]
    pub submission_id: String,
    pub grade: f64,
    pub feedback: String,
}

impl ApiRequest for GradeSubmission {
    type Response = SubmissionResponse;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/assignments/submissions/{}/grade", self.submission_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MySubmissions;

impl ApiRequest for MySubmissions {
    type Response = Vec<Submission>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/assignments/student/my-submissions".into()
    }
}
