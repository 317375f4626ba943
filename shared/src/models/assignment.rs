use super::{Attachment, Course, EntityRef, Identified, UserSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentType {
    #[default]
    Homework,
    Quiz,
    Project,
    Exam,
}

impl AssignmentType {
    pub const ALL: [AssignmentType; 4] = [
        AssignmentType::Homework,
        AssignmentType::Quiz,
        AssignmentType::Project,
        AssignmentType::Exam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentType::Homework => "homework",
            AssignmentType::Quiz => "quiz",
            AssignmentType::Project => "project",
            AssignmentType::Exam => "exam",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssignmentType::Homework => "Homework",
            AssignmentType::Quiz => "Quiz",
            AssignmentType::Project => "Project",
            AssignmentType::Exam => "Exam",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AssignmentType::Homework => "📝",
            AssignmentType::Quiz => "📋",
            AssignmentType::Project => "💼",
            AssignmentType::Exam => "📊",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub course: EntityRef<Course>,
    #[serde(default)]
    pub instructor: Option<EntityRef<UserSummary>>,
    pub due_date: DateTime<Utc>,
    pub max_points: u32,
    #[serde(default)]
    pub assignment_type: AssignmentType,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for Assignment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Assignment {
    pub fn course_id(&self) -> &str {
        self.course.id()
    }

    /// 课程已 populate 时返回课程标题
    pub fn course_title(&self) -> Option<&str> {
        self.course.populated().map(|c| c.title.as_str())
    }
}

/// 提交记录中 populate 的作业 (后端只选取部分字段)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub max_points: Option<u32>,
}

impl Identified for AssignmentSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    Graded,
    Returned,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "draft",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Graded => "graded",
            SubmissionStatus::Returned => "returned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub student: Option<EntityRef<UserSummary>>,
    pub assignment: EntityRef<AssignmentSummary>,
    #[serde(default)]
    pub course: Option<EntityRef<Course>>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub max_points: u32,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub graded_at: Option<DateTime<Utc>>,
    pub status: SubmissionStatus,
}

impl Identified for Submission {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Submission {
    pub fn assignment_id(&self) -> &str {
        self.assignment.id()
    }

    pub fn assignment_title(&self) -> &str {
        self.assignment
            .populated()
            .map(|a| a.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or("Assignment")
    }

    pub fn course_title(&self) -> &str {
        self.course
            .as_ref()
            .and_then(|c| c.populated())
            .map(|c| c.title.as_str())
            .unwrap_or("Course")
    }

    pub fn student_name(&self) -> &str {
        self.student
            .as_ref()
            .and_then(|s| s.populated())
            .map(|s| s.name.as_str())
            .unwrap_or("Unknown Student")
    }

    pub fn is_awaiting_grade(&self) -> bool {
        self.status == SubmissionStatus::Submitted && self.grade.is_none()
    }

    /// 评分等接口可能只回传 id：未 populate 的引用沿用旧记录
    pub fn with_populated_from(mut self, previous: &Submission) -> Self {
        fn keep<T: Clone>(next: &mut Option<EntityRef<T>>, prev: &Option<EntityRef<T>>) {
            let next_populated = matches!(next, Some(EntityRef::Populated(_)));
            if !next_populated && matches!(prev, Some(EntityRef::Populated(_))) {
                *next = prev.clone();
            }
        }

        keep(&mut self.student, &previous.student);
        keep(&mut self.course, &previous.course);
        if matches!(self.assignment, EntityRef::Id(_))
            && matches!(previous.assignment, EntityRef::Populated(_))
        {
            self.assignment = previous.assignment.clone();
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDraft {
    pub title: String,
    pub description: String,
    pub course_id: String,
    pub due_date: String,
    pub max_points: u32,
    pub assignment_type: AssignmentType,
    pub instructions: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_type: Option<AssignmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub content: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPublishResponse {
    #[serde(default)]
    pub message: String,
    pub assignment: Assignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub message: String,
    pub submission: Submission,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_with_bare_assignment_id() {
        let s: Submission = serde_json::from_str(
            r#"{"_id":"s1","assignment":"a1","status":"submitted","maxPoints":10}"#,
        )
        .unwrap();
        assert_eq!(s.assignment_id(), "a1");
        assert!(s.is_awaiting_grade());
        assert_eq!(s.course_title(), "Course");
    }

    #[test]
    fn test_graded_response_keeps_known_student() {
        let before: Submission = serde_json::from_str(
            r#"{
                "_id":"s1","status":"submitted","maxPoints":10,
                "student":{"_id":"u1","name":"Ada","email":"ada@x.io"},
                "assignment":{"_id":"a1","title":"HW1","maxPoints":10}
            }"#,
        )
        .unwrap();
        let graded: Submission = serde_json::from_str(
            r#"{"_id":"s1","student":"u1","assignment":"a1","status":"graded","grade":9,"maxPoints":10}"#,
        )
        .unwrap();

        let merged = graded.with_populated_from(&before);
        assert_eq!(merged.student_name(), "Ada");
        assert_eq!(merged.assignment_title(), "HW1");
        assert_eq!(merged.grade, Some(9.0));
        assert_eq!(merged.status, SubmissionStatus::Graded);
    }

    #[test]
    fn test_populated_response_wins() {
        let before: Submission = serde_json::from_str(
            r#"{"_id":"s1","student":{"_id":"u1","name":"Old"},"assignment":"a1","status":"submitted"}"#,
        )
        .unwrap();
        let graded: Submission = serde_json::from_str(
            r#"{"_id":"s1","student":{"_id":"u1","name":"Ada"},"assignment":"a1","status":"graded"}"#,
        )
        .unwrap();
        assert_eq!(graded.with_populated_from(&before).student_name(), "Ada");
    }

    #[test]
    fn test_assignment_course_ref() {
        let a: Assignment = serde_json::from_str(
            r#"{
                "_id":"a1","title":"HW1",
                "course":{"_id":"c1","title":"Rust 101"},
                "dueDate":"2030-01-01T00:00:00Z","maxPoints":100,
                "assignmentType":"project","isPublished":true
            }"#,
        )
        .unwrap();
        assert_eq!(a.course_id(), "c1");
        assert_eq!(a.course_title(), Some("Rust 101"));
        assert_eq!(a.assignment_type, AssignmentType::Project);
        assert_eq!(AssignmentType::parse("exam"), Some(AssignmentType::Exam));
    }
}
