//! HTTP 传输层
//!
//! `Transport` 是 API 客户端与浏览器之间的接缝：
//! - `FetchTransport`: 使用 `web_sys::fetch`，不引入 `gloo-net`
//! - `MockTransport`: 测试用内存实现，按 (方法, 路径) 返回预设响应

use crate::error::ApiError;
use ocms_shared::protocol::HttpMethod;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::{Headers, Request, RequestInit, Response};

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    #[cfg(test)]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 检查响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

// =========================================================
// 实现层: 浏览器 fetch
// =========================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let headers = Headers::new()
            .map_err(|e| ApiError::RequestBuild(format!("创建 Headers 失败: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| ApiError::RequestBuild(format!("设置 Header 失败: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| ApiError::RequestBuild(format!("{:?}", e)))?;

        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("无法获取 window 对象".into()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::Decode(format!("Response 类型转换失败: {:?}", e)))?;

        let status = response.status();
        let promise = response
            .text()
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
        let body = JsFuture::from(promise)
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

/// 非 wasm 目标 (原生测试) 没有 fetch
#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Network(format!(
            "fetch is unavailable outside the browser: {} {}",
            req.method, req.url
        )))
    }
}

// =========================================================
// 测试工具: MockTransport
// =========================================================

#[cfg(test)]
pub use mock::MockTransport;

#[cfg(test)]
mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// 内存传输层
    ///
    /// 路由以 (方法, 去掉 base url 的路径) 为键；未注册的路由返回 404。
    /// 内部状态共享，clone 出的句柄可在请求发出后检查请求记录。
    #[derive(Debug, Clone, Default)]
    pub struct MockTransport {
        base_url: Rc<RefCell<String>>,
        routes: Rc<RefCell<HashMap<(HttpMethod, String), (u16, String)>>>,
        offline: Rc<RefCell<bool>>,
        pub requests: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl MockTransport {
        pub fn new(base_url: &str) -> Self {
            let mock = Self::default();
            *mock.base_url.borrow_mut() = base_url.to_string();
            mock
        }

        pub fn mock_response(
            &self,
            method: HttpMethod,
            path: &str,
            status: u16,
            body: serde_json::Value,
        ) {
            self.routes
                .borrow_mut()
                .insert((method, path.to_string()), (status, body.to_string()));
        }

        /// 模拟断网：所有请求返回 `ApiError::Network`
        pub fn set_offline(&self, offline: bool) {
            *self.offline.borrow_mut() = offline;
        }

        /// 已发出的请求路径 (按顺序)
        pub fn paths(&self) -> Vec<(HttpMethod, String)> {
            let base = self.base_url.borrow();
            self.requests
                .borrow()
                .iter()
                .map(|r| {
                    let path = r.url.strip_prefix(base.as_str()).unwrap_or(&r.url);
                    (r.method, path.to_string())
                })
                .collect()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for MockTransport {
        async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(req.clone());
            // 让出一次，使并发请求能够交错
            tokio::task::yield_now().await;

            if *self.offline.borrow() {
                return Err(ApiError::Network("Network Error".into()));
            }

            let path = {
                let base = self.base_url.borrow();
                req.url
                    .strip_prefix(base.as_str())
                    .unwrap_or(&req.url)
                    .to_string()
            };

            let routes = self.routes.borrow();
            if let Some((status, body)) = routes.get(&(req.method, path)) {
                Ok(HttpResponse {
                    status: *status,
                    body: body.clone(),
                })
            } else {
                Ok(HttpResponse {
                    status: 404,
                    body: r#"{"message":"Not Found"}"#.to_string(),
                })
            }
        }
    }
}
