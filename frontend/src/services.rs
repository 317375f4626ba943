//! 领域服务 (Domain Services)
//!
//! 每个服务包装一组固定端点：一次调用对应一次 HTTP 请求，
//! 直接返回解析后的数据或传播错误；不重试、不缓存、不合并。
//!
//! ```ignore
//! let courses = api.courses().list().await?;
//! ```

mod assignments;
mod auth;
mod communication;
mod courses;
mod enrollments;
mod instructor;
mod materials;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use communication::CommunicationService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use instructor::InstructorService;
pub use materials::MaterialService;

use crate::api::ApiClient;
use crate::web::http::Transport;

impl<T: Transport> ApiClient<T> {
    pub fn auth(&self) -> AuthService<'_, T> {
        AuthService { api: self }
    }

    pub fn courses(&self) -> CourseService<'_, T> {
        CourseService { api: self }
    }

    pub fn enrollments(&self) -> EnrollmentService<'_, T> {
        EnrollmentService { api: self }
    }

    pub fn assignments(&self) -> AssignmentService<'_, T> {
        AssignmentService { api: self }
    }

    pub fn materials(&self) -> MaterialService<'_, T> {
        MaterialService { api: self }
    }

    pub fn communication(&self) -> CommunicationService<'_, T> {
        CommunicationService { api: self }
    }

    pub fn instructor(&self) -> InstructorService<'_, T> {
        InstructorService { api: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;
    use crate::error::ApiError;
    use crate::web::http::MockTransport;
    use ocms_shared::protocol::HttpMethod;
    use ocms_shared::{MaterialOrder, MessageDraft};
    use serde_json::json;

    const BASE: &str = "http://api.test/api";

    fn client() -> ApiClient<MockTransport> {
        ApiClient::new(BASE, MockTransport::new(BASE)).with_token(Some("t".into()))
    }

    #[tokio::test]
    async fn test_each_operation_is_a_single_call() {
        let api = client();
        let mock = api.transport().clone();
        mock.mock_response(HttpMethod::Get, "/notifications/unread-count", 200, json!({"count": 3}));
        mock.mock_response(
            HttpMethod::Delete,
            "/enrollments/courses/c1/unenroll",
            200,
            json!({"message": "Successfully unenrolled"}),
        );

        assert_eq!(api.communication().unread_count().await.unwrap(), 3);
        assert_eq!(
            api.enrollments().unenroll("c1").await.unwrap().message,
            "Successfully unenrolled"
        );
        assert_eq!(
            mock.paths(),
            vec![
                (HttpMethod::Get, "/notifications/unread-count".to_string()),
                (HttpMethod::Delete, "/enrollments/courses/c1/unenroll".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_material_failure_is_not_swallowed() {
        let api = client();
        api.transport().mock_response(
            HttpMethod::Get,
            "/learning-materials/course/c1",
            500,
            json!({"message": "boom"}),
        );
        let err = api.materials().for_course("c1").await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, message: "boom".into() });
    }

    #[tokio::test]
    async fn test_reorder_sends_materials_array() {
        let api = client();
        api.transport().mock_response(
            HttpMethod::Patch,
            "/learning-materials/course/c1/reorder",
            200,
            json!({"message": "Materials reordered"}),
        );
        api.materials()
            .reorder(
                "c1",
                vec![
                    MaterialOrder { id: "m2".into(), order: 0 },
                    MaterialOrder { id: "m1".into(), order: 1 },
                ],
            )
            .await
            .unwrap();

        let reqs = api.transport().requests.borrow();
        let body: serde_json::Value =
            serde_json::from_str(reqs[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"materials": [{"id": "m2", "order": 0}, {"id": "m1", "order": 1}]})
        );
    }

    #[tokio::test]
    async fn test_announcement_posts_to_announcement_endpoint() {
        let api = client();
        api.transport().mock_response(
            HttpMethod::Post,
            "/messages/announcement",
            201,
            json!({
                "_id": "m1", "sender": "u1", "course": "c1",
                "content": "Welcome", "messageType": "course_announcement"
            }),
        );
        let msg = api
            .communication()
            .send_announcement(MessageDraft {
                course_id: Some("c1".into()),
                content: "Welcome".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(msg.content, "Welcome");
        assert_eq!(api.transport().request_count(), 1);
    }
}
