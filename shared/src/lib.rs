//! OCMS 前后端共享类型
//!
//! - `models`: 后端 REST API 返回的领域模型
//! - `protocol`: 每个端点一个请求类型，绑定方法、路径与响应类型
//! - `date`: 截止时间判断与日期格式化

pub mod date;
pub mod error;
pub mod models;
pub mod protocol;

pub use error::{ErrorResponse, MessageResponse};
pub use models::*;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// 生成 Bearer 认证头的值
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
