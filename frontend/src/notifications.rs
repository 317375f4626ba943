//! 通知铃铛状态
//!
//! 列表与未读数独立加载，任何一个失败都不影响另一个。
//! 单条标记已读是乐观更新 (先改本地再请求，失败只记录日志)；
//! 全部已读必须等后端成功后才修改本地状态。

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::web::http::Transport;
use leptos::logging::error;
use ocms_shared::Notification;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFeed {
    pub items: Vec<Notification>,
    pub unread: u32,
}

impl NotificationFeed {
    /// 本地标记已读。只有原本未读时才递减计数，返回是否需要同步后端
    pub fn mark_read_local(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.is_read => {
                n.is_read = true;
                self.unread = self.unread.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_read_local(&mut self) {
        for n in &mut self.items {
            n.is_read = true;
        }
        self.unread = 0;
    }

    /// 角标文本，超过 9 显示 `9+`，没有未读时不显示
    pub fn badge(&self) -> Option<String> {
        match self.unread {
            0 => None,
            1..=9 => Some(self.unread.to_string()),
            _ => Some("9+".to_string()),
        }
    }
}

/// 并发加载列表与未读数
pub async fn load_feed<T: Transport>(api: &ApiClient<T>) -> NotificationFeed {
    let comm = api.communication();
    let (items, unread) = futures::join!(comm.my_notifications(), comm.unread_count());

    NotificationFeed {
        items: items.unwrap_or_else(|e| {
            error!("[Notifications] Failed to load notifications: {}", e);
            Vec::new()
        }),
        unread: unread.unwrap_or_else(|e| {
            error!("[Notifications] Failed to load unread count: {}", e);
            0
        }),
    }
}

/// 乐观更新后的后端同步，失败不回滚
pub async fn sync_read<T: Transport>(api: &ApiClient<T>, id: &str) {
    if let Err(e) = api.communication().mark_notification_read(id).await {
        error!("[Notifications] Failed to mark {} as read: {}", id, e);
    }
}

/// 全部已读：后端成功后才修改 `feed`
pub async fn mark_all_read<T: Transport>(
    api: &ApiClient<T>,
    feed: &mut NotificationFeed,
) -> ApiResult<()> {
    api.communication().mark_all_notifications_read().await?;
    feed.mark_all_read_local();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::MockTransport;
    use ocms_shared::protocol::HttpMethod;
    use serde_json::{Value, json};

    const BASE: &str = "http://api.test/api";

    fn api() -> ApiClient<MockTransport> {
        ApiClient::new(BASE, MockTransport::new(BASE)).with_token(Some("t".into()))
    }

    fn notification(id: &str, read: bool) -> Value {
        json!({
            "_id": id, "user": "u1", "title": "T", "message": "M",
            "type": "announcement", "isRead": read
        })
    }

    fn feed(read_flags: &[bool], unread: u32) -> NotificationFeed {
        NotificationFeed {
            items: read_flags
                .iter()
                .enumerate()
                .map(|(i, r)| serde_json::from_value(notification(&format!("n{i}"), *r)).unwrap())
                .collect(),
            unread,
        }
    }

    #[test]
    fn test_mark_read_decrements_once() {
        let mut f = feed(&[false, true], 1);
        assert!(f.mark_read_local("n0"));
        assert_eq!(f.unread, 0);
        // 再次点击不再递减
        assert!(!f.mark_read_local("n0"));
        // 已读项不递减
        assert!(!f.mark_read_local("n1"));
        assert_eq!(f.unread, 0);
    }

    #[test]
    fn test_unread_counter_saturates() {
        let mut f = feed(&[false], 0);
        assert!(f.mark_read_local("n0"));
        assert_eq!(f.unread, 0);
    }

    #[test]
    fn test_badge() {
        assert_eq!(feed(&[], 0).badge(), None);
        assert_eq!(feed(&[], 9).badge().as_deref(), Some("9"));
        assert_eq!(feed(&[], 10).badge().as_deref(), Some("9+"));
    }

    #[tokio::test]
    async fn test_list_and_count_load_independently() {
        let api = api();
        api.transport().mock_response(
            HttpMethod::Get,
            "/notifications/my-notifications",
            500,
            json!({"message": "down"}),
        );
        api.transport().mock_response(
            HttpMethod::Get,
            "/notifications/unread-count",
            200,
            json!({"count": 4}),
        );

        let f = load_feed(&api).await;
        assert!(f.items.is_empty());
        assert_eq!(f.unread, 4);
    }

    #[tokio::test]
    async fn test_failed_sync_keeps_optimistic_state() {
        let api = api();
        api.transport().set_offline(true);
        let mut f = feed(&[false], 1);

        assert!(f.mark_read_local("n0"));
        sync_read(&api, "n0").await;
        assert!(f.items[0].is_read);
        assert_eq!(f.unread, 0);
        assert_eq!(api.transport().request_count(), 1);
    }

    #[tokio::test]
    async fn test_mark_all_read_only_after_success() {
        let api = api();
        let mut f = feed(&[false, false], 2);

        // 未注册路由 -> 404
        assert!(mark_all_read(&api, &mut f).await.is_err());
        assert_eq!(f, feed(&[false, false], 2));

        api.transport().mock_response(
            HttpMethod::Patch,
            "/notifications/mark-all-read",
            200,
            json!({"message": "All notifications marked as read"}),
        );
        mark_all_read(&api, &mut f).await.unwrap();
        assert_eq!(f.unread, 0);
        assert!(f.items.iter().all(|n| n.is_read));
    }
}
