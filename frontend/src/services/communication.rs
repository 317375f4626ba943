use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::web::http::Transport;
use ocms_shared::protocol::{
    CourseAnnouncements, MarkAllNotificationsRead, MarkMessageRead, MarkNotificationRead,
    MyMessages, MyNotifications, SendAnnouncement, SendDirectMessage, UnreadNotificationCount,
};
use ocms_shared::{Message, MessageDraft, MessageResponse, Notification};

pub struct CommunicationService<'a, T> {
    pub(super) api: &'a ApiClient<T>,
}

impl<T: Transport> CommunicationService<'_, T> {
    // --- 消息 ---

    pub async fn send_direct(&self, draft: MessageDraft) -> ApiResult<Message> {
        self.api.call(&SendDirectMessage(draft)).await
    }

    pub async fn send_announcement(&self, draft: MessageDraft) -> ApiResult<Message> {
        self.api.call(&SendAnnouncement(draft)).await
    }

    pub async fn my_messages(&self) -> ApiResult<Vec<Message>> {
        self.api.call(&MyMessages).await
    }

    pub async fn course_announcements(&self, course_id: &str) -> ApiResult<Vec<Message>> {
        self.api.call(&CourseAnnouncements::new(course_id)).await
    }

    pub async fn mark_message_read(&self, message_id: &str) -> ApiResult<Message> {
        self.api
            .call(&MarkMessageRead {
                message_id: message_id.to_string(),
            })
            .await
    }

    // --- 通知 ---

    pub async fn my_notifications(&self) -> ApiResult<Vec<Notification>> {
        self.api.call(&MyNotifications).await
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> ApiResult<Notification> {
        self.api
            .call(&MarkNotificationRead {
                notification_id: notification_id.to_string(),
            })
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> ApiResult<MessageResponse> {
        self.api.call(&MarkAllNotificationsRead {}).await
    }

    pub async fn unread_count(&self) -> ApiResult<u32> {
        Ok(self.api.call(&UnreadNotificationCount).await?.count)
    }
}
