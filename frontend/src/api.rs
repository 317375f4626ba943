//! API 客户端
//!
//! 根据 [`ApiRequest`] 的元数据组装请求：拼接路径、附加 Bearer token、
//! 写方法序列化请求体；非 2xx 响应转换为 [`ApiError::Status`]。

use crate::error::{ApiError, ApiResult};
use crate::web::http::{FetchTransport, HttpRequest, Transport};
use ocms_shared::protocol::ApiRequest;
use ocms_shared::{CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, bearer};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient<T = FetchTransport> {
    base_url: String,
    token: Option<String>,
    transport: T,
}

impl ApiClient<FetchTransport> {
    pub fn browser(base_url: &str) -> Self {
        Self::new(base_url, FetchTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
            transport,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    #[cfg(test)]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发出一次请求并解析响应
    pub async fn call<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        let mut http = HttpRequest::new(R::METHOD, self.url(&req.path()));

        if let Some(token) = &self.token {
            http = http.with_header(HEADER_AUTHORIZATION, &bearer(token));
        }

        if R::METHOD.has_body() {
            let body =
                serde_json::to_string(req).map_err(|e| ApiError::RequestBuild(e.to_string()))?;
            http = http
                .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
                .with_body(body);
        }

        let res = self.transport.send(http).await?;

        if !res.ok() {
            return Err(ApiError::from_response(res.status, &res.body));
        }

        Ok(serde_json::from_str(&res.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::MockTransport;
    use ocms_shared::protocol::{GradeSubmission, HttpMethod, ListCourses, ToggleCoursePublish};
    use serde_json::json;

    const BASE: &str = "http://api.test/api";

    fn client() -> ApiClient<MockTransport> {
        ApiClient::new(BASE, MockTransport::new(BASE))
    }

    #[tokio::test]
    async fn test_get_without_token_has_no_auth_or_body() {
        let api = client();
        api.transport()
            .mock_response(HttpMethod::Get, "/courses", 200, json!([]));

        let courses = api.call(&ListCourses).await.unwrap();
        assert!(courses.is_empty());

        let reqs = api.transport().requests.borrow();
        assert_eq!(reqs[0].url, "http://api.test/api/courses");
        assert_eq!(reqs[0].header(HEADER_AUTHORIZATION), None);
        assert_eq!(reqs[0].body, None);
    }

    #[tokio::test]
    async fn test_bearer_and_json_body() {
        let api = client().with_token(Some("abc".into()));
        api.transport().mock_response(
            HttpMethod::Patch,
            "/assignments/submissions/s1/grade",
            200,
            json!({
                "message": "graded",
                "submission": {
                    "_id": "s1", "student": "u1", "assignment": "a1",
                    "content": "answer", "grade": 9, "maxPoints": 10, "status": "graded"
                }
            }),
        );

        let res = api
            .call(&GradeSubmission {
                submission_id: "s1".into(),
                grade: 9.0,
                feedback: "nice".into(),
            })
            .await
            .unwrap();
        assert_eq!(res.submission.grade, Some(9.0));

        let reqs = api.transport().requests.borrow();
        assert_eq!(reqs[0].header("authorization"), Some("Bearer abc"));
        assert_eq!(reqs[0].header(HEADER_CONTENT_TYPE), Some(CONTENT_TYPE_JSON));
        assert_eq!(
            reqs[0].body.as_deref(),
            Some(r#"{"grade":9.0,"feedback":"nice"}"#)
        );
    }

    #[tokio::test]
    async fn test_error_status_surfaces_backend_message() {
        let api = client();
        api.transport().mock_response(
            HttpMethod::Patch,
            "/courses/c1/publish",
            403,
            json!({"message": "Not authorized to modify this course"}),
        );

        let err = api.call(&ToggleCoursePublish::new("c1")).await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.user_message("x"), "Not authorized to modify this course");
    }

    #[tokio::test]
    async fn test_decode_and_network_failures() {
        let api = client();
        api.transport()
            .mock_response(HttpMethod::Get, "/courses", 200, json!({"not": "a list"}));
        assert!(matches!(
            api.call(&ListCourses).await,
            Err(ApiError::Decode(_))
        ));

        api.transport().set_offline(true);
        assert!(matches!(
            api.call(&ListCourses).await,
            Err(ApiError::Network(_))
        ));
    }
}
