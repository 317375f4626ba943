use super::{ApiRequest, HttpMethod};
use crate::{Message, MessageDraft, MessageResponse, Notification, UnreadCount};
use serde::Serialize;

// =========================================================
// 消息 (Messages)
// =========================================================

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SendDirectMessage(pub MessageDraft);

impl ApiRequest for SendDirectMessage {
    type Response = Message;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/messages/direct".into()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SendAnnouncement(pub MessageDraft);

impl ApiRequest for SendAnnouncement {
    type Response = Message;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/messages/announcement".into()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MyMessages;

impl ApiRequest for MyMessages {
    type Response = Vec<Message>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/messages/my-messages".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseAnnouncements {
    #[serde(skip)]
    pub course_id: String,
}

impl CourseAnnouncements {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl ApiRequest for CourseAnnouncements {
    type Response = Vec<Message>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/messages/course/{}/announcements", self.course_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkMessageRead {
    #[serde(skip)]
    pub message_id: String,
}

impl ApiRequest for MarkMessageRead {
    type Response = Message;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/messages/{}/read", self.message_id)
    }
}

// =========================================================
// 通知 (Notifications)
// =========================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MyNotifications;

impl ApiRequest for MyNotifications {
    type Response = Vec<Notification>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/notifications/my-notifications".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkNotificationRead {
    #[serde(skip)]
    pub notification_id: String,
}

impl ApiRequest for MarkNotificationRead {
    type Response = Notification;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/notifications/{}/read", self.notification_id)
    }
}

/// 无参数，但 PATCH 仍需发送 `{}` 请求体
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MarkAllNotificationsRead {}

impl ApiRequest for MarkAllNotificationsRead {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        "/notifications/mark-all-read".into()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnreadNotificationCount;

impl ApiRequest for UnreadNotificationCount {
    type Response = UnreadCount;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/notifications/unread-count".into()
    }
}
