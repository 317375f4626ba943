//! 前端错误类型
//!
//! 所有服务调用统一返回 [`ApiResult`]。错误分三类：传输失败、
//! 后端返回的业务错误 (带 message)、以及详情页常见的 404。

use ocms_shared::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 请求构建失败 (序列化、Headers 等)
    #[error("request build failed: {0}")]
    RequestBuild(String),
    /// 网络层失败，未拿到响应
    #[error("network error: {0}")]
    Network(String),
    /// 后端返回非 2xx
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// 响应体无法解析为期望类型
    #[error("response decode failed: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// 由非 2xx 响应构造，优先使用后端的 `{ message }`
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.describe())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// 令牌缺失或失效；403 是角色不足，不在此列
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// 页面横幅文本：后端消息优先，否则使用页面自己的兜底文案
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_preferred() {
        let err = ApiError::from_response(400, r#"{"message":"Already enrolled in this course"}"#);
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.user_message("Failed to enroll"),
            "Already enrolled in this course"
        );
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = ApiError::from_response(
            400,
            r#"{"errors":[{"param":"email","msg":"Invalid email"}]}"#,
        );
        assert!(err.user_message("x").contains("Invalid email"));
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status(), Some(502));
        assert_eq!(
            err.to_string(),
            "HTTP 502: Request failed with status code 502"
        );
    }

    #[test]
    fn test_status_predicates() {
        assert!(ApiError::from_response(404, "").is_not_found());
        assert!(ApiError::from_response(401, "{}").is_unauthorized());
        assert!(!ApiError::from_response(403, "{}").is_unauthorized());
        let net = ApiError::Network("offline".into());
        assert!(!net.is_unauthorized());
        assert_eq!(net.status(), None);
        assert_eq!(net.user_message("Failed to load courses"), "Failed to load courses");
    }
}
