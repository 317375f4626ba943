use super::{EntityRef, Identified, UserSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// 如 `CS101`
    #[serde(default)]
    pub course_code: String,
    /// `beginner` / `intermediate` / `advanced` / `all-levels`
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructor: Option<EntityRef<UserSummary>>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    /// 仅讲师课程列表会附带
    #[serde(default)]
    pub student_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Course {
    /// 讲师姓名，未 populate 时返回占位文本
    pub fn instructor_name(&self) -> &str {
        match self.instructor.as_ref().and_then(|i| i.populated()) {
            Some(instructor) if !instructor.name.is_empty() => &instructor.name,
            _ => "Unknown Instructor",
        }
    }
}

/// 创建/更新课程的请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub course_code: String,
    pub level: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: String,
    pub learning_objectives: Vec<String>,
    pub requirements: Vec<String>,
    pub target_audience: Vec<String>,
}

/// 部分更新；未设置的字段不会序列化
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_objectives: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoursePublishResponse {
    #[serde(default)]
    pub message: String,
    pub course: Course,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_with_populated_instructor() {
        let course: Course = serde_json::from_str(
            r#"{
                "_id": "c1",
                "title": "Rust 101",
                "courseCode": "CS101",
                "level": "beginner",
                "instructor": {"_id": "u9", "name": "Dr. Ferris", "email": "f@x.io"},
                "category": "programming",
                "isPublished": true,
                "learningObjectives": ["ownership"],
                "createdAt": "2024-03-01T10:00:00.000Z"
            }"#,
        )
        .unwrap();
        assert_eq!(course.instructor_name(), "Dr. Ferris");
        assert_eq!(course.instructor.as_ref().map(|i| i.id()), Some("u9"));
        assert!(course.is_published);
        assert!(course.requirements.is_empty());
        assert_eq!(course.course_code, "CS101");
        assert_eq!(course.level, "beginner");
    }

    #[test]
    fn test_course_with_bare_instructor_id() {
        let course: Course =
            serde_json::from_str(r#"{"_id":"c2","title":"Go","instructor":"u1"}"#).unwrap();
        assert_eq!(course.instructor_name(), "Unknown Instructor");
        assert_eq!(course.student_count, None);
        assert!(course.course_code.is_empty());
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = CoursePatch {
            title: Some("New".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"title":"New"}"#);
    }
}
