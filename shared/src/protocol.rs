//! 端点描述 (Endpoint Descriptions)
//!
//! 每个后端端点对应一个请求类型：类型本身即请求体 (路径参数用
//! `#[serde(skip)]` 排除)，并通过 [`ApiRequest`] 绑定方法、路径与响应类型。

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;

mod assignments;
mod auth;
mod communication;
mod courses;
mod enrollments;
mod instructor;
mod materials;

pub use assignments::*;
pub use auth::*;
pub use communication::*;
pub use courses::*;
pub use enrollments::*;
pub use instructor::*;
pub use materials::*;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// 是否携带 JSON 请求体
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// 相对于 API 根地址的路径，以 `/` 开头
    fn path(&self) -> String;
}
