use super::{Course, EntityRef, Identified, UserSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub student: Option<EntityRef<UserSummary>>,
    pub course: Course,
    #[serde(default)]
    pub enrolled_at: Option<DateTime<Utc>>,
    /// 0–100，由后端保证（前端不假设）
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Identified for Enrollment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Enrollment {
    pub fn course_id(&self) -> &str {
        &self.course.id
    }

    pub fn student_name(&self) -> &str {
        match self.student.as_ref().and_then(|s| s.populated()) {
            Some(student) => &student.name,
            None => "Unknown Student",
        }
    }

    pub fn student_email(&self) -> Option<&str> {
        self.student
            .as_ref()
            .and_then(|s| s.populated())
            .map(|s| s.email.as_str())
            .filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollResponse {
    #[serde(default)]
    pub message: String,
    pub enrollment: Enrollment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_student_without_role() {
        let enrollment: Enrollment = serde_json::from_str(
            r#"{
                "_id": "e1",
                "student": {"_id": "u1", "name": "Ada", "email": "ada@x.io"},
                "course": {"_id": "c1", "title": "Rust 101"},
                "progress": 40
            }"#,
        )
        .unwrap();
        assert_eq!(enrollment.student_name(), "Ada");
        assert_eq!(enrollment.student_email(), Some("ada@x.io"));
        assert_eq!(enrollment.course_id(), "c1");
    }

    #[test]
    fn test_student_as_bare_id() {
        let enrollment: Enrollment = serde_json::from_str(
            r#"{"_id":"e2","student":"u2","course":{"_id":"c1","title":"Rust 101"}}"#,
        )
        .unwrap();
        assert_eq!(enrollment.student_name(), "Unknown Student");
        assert_eq!(enrollment.student_email(), None);
        assert_eq!(enrollment.progress, 0.0);
    }
}
