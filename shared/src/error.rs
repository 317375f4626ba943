use serde::{Deserialize, Serialize};

/// 后端失败响应体 (`{ "message": "..." }`)
///
/// 某些端点在校验失败时只返回 `errors` 数组，此时 `message` 为空。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, alias = "param", alias = "path")]
    pub field: String,
    #[serde(alias = "msg")]
    pub message: String,
}

impl ErrorResponse {
    /// 面向用户的错误描述，优先使用 `message`，其次是第一个字段错误
    pub fn describe(&self) -> Option<String> {
        if !self.message.trim().is_empty() {
            return Some(self.message.clone());
        }
        self.errors.first().map(|e| {
            if e.field.is_empty() {
                e.message.clone()
            } else {
                format!("{}: {}", e.field, e.message)
            }
        })
    }
}

/// 仅携带提示信息的成功响应 (unenroll / delete / mark-all-read 等)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_prefers_message() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"message":"Already enrolled","errors":[{"msg":"x"}]}"#)
                .unwrap();
        assert_eq!(body.describe().as_deref(), Some("Already enrolled"));
    }

    #[test]
    fn test_describe_falls_back_to_field_error() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"errors":[{"param":"email","msg":"is invalid"}]}"#).unwrap();
        assert_eq!(body.describe().as_deref(), Some("email: is invalid"));
        assert_eq!(ErrorResponse::default().describe(), None);
    }
}
