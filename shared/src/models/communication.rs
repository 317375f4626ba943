use super::{Attachment, Course, EntityRef, Identified, UserSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Direct,
    CourseAnnouncement,
    Group,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub sender: EntityRef<UserSummary>,
    #[serde(default)]
    pub receiver: Option<EntityRef<UserSummary>>,
    #[serde(default)]
    pub course: Option<EntityRef<Course>>,
    pub content: String,
    pub message_type: MessageType,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for Message {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Message {
    pub fn sender_name(&self) -> &str {
        self.sender
            .populated()
            .map(|s| s.name.as_str())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    AssignmentDue,
    AssignmentGraded,
    Announcement,
    Message,
    System,
    Enrollment,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::AssignmentDue => "📝",
            NotificationKind::AssignmentGraded => "📊",
            NotificationKind::Announcement => "📢",
            NotificationKind::Message => "💬",
            NotificationKind::Enrollment => "🎓",
            NotificationKind::System => "🔔",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Course,
    Assignment,
    Submission,
    Message,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntity {
    pub entity_type: EntityKind,
    pub entity_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub related_entity: Option<RelatedEntity>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 私信 / 课程公告的请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    pub content: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_kind_from_type_field() {
        let n: Notification = serde_json::from_str(
            r#"{
                "_id":"n1","user":"u1","title":"Graded","message":"HW1 graded",
                "type":"assignment_graded","isRead":false,
                "relatedEntity":{"entityType":"submission","entityId":"s1"}
            }"#,
        )
        .unwrap();
        assert_eq!(n.kind, NotificationKind::AssignmentGraded);
        assert_eq!(n.kind.icon(), "📊");
        assert_eq!(
            n.related_entity.map(|r| r.entity_type),
            Some(EntityKind::Submission)
        );
    }

    #[test]
    fn test_announcement_draft_omits_receiver() {
        let draft = MessageDraft {
            course_id: Some("c1".into()),
            content: "Exam moved".into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"courseId":"c1","content":"Exam moved","attachments":[]})
        );
    }
}
