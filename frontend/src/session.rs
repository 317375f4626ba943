//! 会话状态 (Session State)
//!
//! 纯数据层，不依赖 Leptos 信号：每个操作基于当前状态计算下一个状态，
//! 由 `auth` 模块写回 Context。token 持久化通过 [`TokenStore`] 抽象，
//! 浏览器下为 localStorage，测试中为内存实现。

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::web::http::{FetchTransport, Transport};
use leptos::logging::warn;
use ocms_shared::protocol::RegisterRequest;
use ocms_shared::{AuthResponse, Role, User};

// =========================================================
// Token 持久化
// =========================================================

pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// localStorage 中的单个 token
///
/// 隐私模式或禁用存储时 `storage()` 为 `None`：读到的是匿名，写入只记日志。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(&self.key)
            .ok()?
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        let saved = Self::storage().is_some_and(|s| s.set_item(&self.key, token).is_ok());
        if !saved {
            warn!("[Auth] Failed to persist token");
        }
    }

    fn clear(&self) {
        let cleared = Self::storage().is_some_and(|s| s.remove_item(&self.key).is_ok());
        if !cleared {
            warn!("[Auth] Failed to clear token");
        }
    }
}

#[cfg(test)]
pub use memory::MemoryTokenStore;

#[cfg(test)]
mod memory {
    use super::TokenStore;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct MemoryTokenStore {
        pub token: RefCell<Option<String>>,
    }

    impl MemoryTokenStore {
        pub fn with_token(token: &str) -> Self {
            Self {
                token: RefCell::new(Some(token.to_string())),
            }
        }
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
        }
    }
}

// =========================================================
// 会话状态
// =========================================================

#[derive(Clone, Debug)]
pub struct SessionState<T = FetchTransport> {
    /// API 客户端，登录后携带 Bearer token
    pub api: ApiClient<T>,
    /// 当前用户
    pub user: Option<User>,
    /// 首次会话校验进行中
    pub is_loading: bool,
}

impl<T: Transport + Clone> SessionState<T> {
    /// 初始状态：匿名，加载中
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            api: api.with_token(None),
            user: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// 角色检查 (仅用于界面控制，真正的授权在后端)
    ///
    /// 未登录一律 false；未指定角色为 true；管理员总是 true；否则角色必须相同。
    pub fn check_access(&self, required: Option<Role>) -> bool {
        match (&self.user, required) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(user), Some(_)) if user.role == Role::Admin => true,
            (Some(user), Some(role)) => user.role == role,
        }
    }

    /// 已登录的状态
    fn signed_in(&self, token: String, user: User) -> Self {
        Self {
            api: self.api.clone().with_token(Some(token)),
            user: Some(user),
            is_loading: false,
        }
    }

    /// 匿名状态
    fn anonymous(&self) -> Self {
        Self {
            api: self.api.clone().with_token(None),
            user: None,
            is_loading: false,
        }
    }

    /// 页面加载时恢复会话
    ///
    /// 没有 token 直接结束加载；有 token 则请求 `/auth/me`，
    /// 失败时静默清除 token 并视为未登录。
    pub async fn restore(&self, store: &impl TokenStore) -> Self {
        let Some(token) = store.load() else {
            return self.anonymous();
        };

        let api = self.api.clone().with_token(Some(token.clone()));
        match api.auth().me().await {
            Ok(user) => self.signed_in(token, user),
            Err(e) => {
                warn!("[Auth] Session check failed: {}", e);
                store.clear();
                self.anonymous()
            }
        }
    }

    pub async fn login(
        &self,
        store: &impl TokenStore,
        email: &str,
        password: &str,
    ) -> ApiResult<Self> {
        let res = self.api.auth().login(email, password).await?;
        Ok(self.accept(store, res))
    }

    pub async fn register(&self, store: &impl TokenStore, req: &RegisterRequest) -> ApiResult<Self> {
        let res = self.api.auth().register(req).await?;
        Ok(self.accept(store, res))
    }

    fn accept(&self, store: &impl TokenStore, res: AuthResponse) -> Self {
        store.save(&res.token);
        self.signed_in(res.token, res.user)
    }

    /// 已登录时后端返回 401：令牌已过期或被撤销，清除后回到匿名状态
    pub fn expire(&self, store: &impl TokenStore, err: &ApiError) -> Option<Self> {
        if !self.is_authenticated() || !err.is_unauthorized() {
            return None;
        }
        store.clear();
        Some(self.anonymous())
    }

    /// 同步注销，不请求后端
    pub fn logout(&self, store: &impl TokenStore) -> Self {
        store.clear();
        self.anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::MockTransport;
    use ocms_shared::protocol::HttpMethod;
    use serde_json::json;

    const BASE: &str = "http://api.test/api";

    fn session() -> SessionState<MockTransport> {
        SessionState::new(ApiClient::new(BASE, MockTransport::new(BASE)))
    }

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role,
        }
    }

    fn with_user(role: Role) -> SessionState<MockTransport> {
        let mut s = session();
        s.user = Some(user(role));
        s.is_loading = false;
        s
    }

    // =========================================================
    // check_access 测试
    // =========================================================

    #[test]
    fn test_check_access_anonymous_is_denied() {
        let s = session();
        assert!(!s.check_access(None));
        for role in Role::ALL {
            assert!(!s.check_access(Some(role)));
        }
    }

    #[test]
    fn test_check_access_matrix() {
        for actual in Role::ALL {
            let s = with_user(actual);
            assert!(s.check_access(None));
            for required in Role::ALL {
                let expected = actual == Role::Admin || actual == required;
                assert_eq!(s.check_access(Some(required)), expected, "{actual} -> {required}");
            }
        }
    }

    // =========================================================
    // restore 测试
    // =========================================================

    #[tokio::test]
    async fn test_restore_without_token_skips_backend() {
        let s = session();
        let store = MemoryTokenStore::default();

        let next = s.restore(&store).await;
        assert!(!next.is_loading);
        assert!(next.user.is_none());
        assert_eq!(s.api.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn test_restore_with_valid_token() {
        let s = session();
        s.api.transport().mock_response(
            HttpMethod::Get,
            "/auth/me",
            200,
            json!({"user": {"id": "u1", "name": "Ada", "email": "ada@example.com", "role": "instructor"}}),
        );
        let store = MemoryTokenStore::with_token("tok");

        let next = s.restore(&store).await;
        assert_eq!(next.role(), Some(Role::Instructor));
        assert_eq!(next.api.token(), Some("tok"));
        assert!(!next.is_loading);

        let reqs = s.api.transport().requests.borrow();
        assert_eq!(reqs[0].header("Authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_restore_failure_clears_token() {
        let s = session();
        s.api.transport().mock_response(
            HttpMethod::Get,
            "/auth/me",
            401,
            json!({"message": "Token is not valid"}),
        );
        let store = MemoryTokenStore::with_token("stale");

        let next = s.restore(&store).await;
        assert!(!next.is_authenticated());
        assert!(!next.is_loading);
        assert_eq!(next.api.token(), None);
        assert_eq!(*store.token.borrow(), None);
    }

    // =========================================================
    // login / register / logout 测试
    // =========================================================

    #[tokio::test]
    async fn test_login_persists_token_and_user() {
        let s = session();
        s.api.transport().mock_response(
            HttpMethod::Post,
            "/auth/login",
            200,
            json!({"token": "jwt", "user": {"_id": "u1", "name": "Ada", "email": "ada@example.com", "role": "student"}}),
        );
        let store = MemoryTokenStore::default();

        let next = s.login(&store, "ada@example.com", "secret").await.unwrap();
        assert_eq!(next.role(), Some(Role::Student));
        assert_eq!(store.token.borrow().as_deref(), Some("jwt"));
        assert_eq!(next.api.token(), Some("jwt"));
    }

    #[tokio::test]
    async fn test_login_failure_leaves_store_untouched() {
        let s = session();
        s.api.transport().mock_response(
            HttpMethod::Post,
            "/auth/login",
            400,
            json!({"message": "Invalid credentials"}),
        );
        let store = MemoryTokenStore::default();

        let err = s.login(&store, "ada@example.com", "nope").await.unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert_eq!(*store.token.borrow(), None);
    }

    #[tokio::test]
    async fn test_register_sends_role() {
        let s = session();
        s.api.transport().mock_response(
            HttpMethod::Post,
            "/auth/register",
            201,
            json!({"token": "jwt", "user": {"id": "u2", "name": "Bo", "email": "bo@example.com", "role": "instructor"}}),
        );
        let store = MemoryTokenStore::default();
        let req = RegisterRequest {
            name: "Bo".into(),
            email: "bo@example.com".into(),
            password: "secret1".into(),
            role: Role::Instructor,
        };

        let next = s.register(&store, &req).await.unwrap();
        assert_eq!(next.role(), Some(Role::Instructor));

        let reqs = s.api.transport().requests.borrow();
        let body: serde_json::Value =
            serde_json::from_str(reqs[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["role"], "instructor");
    }

    #[tokio::test]
    async fn test_logout_is_local() {
        let s = with_user(Role::Student);
        let store = MemoryTokenStore::with_token("jwt");

        let next = s.logout(&store);
        assert!(!next.is_authenticated());
        assert_eq!(*store.token.borrow(), None);
        assert_eq!(s.api.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn test_expired_token_signs_out() {
        let mut s = with_user(Role::Instructor);
        s.api = s.api.clone().with_token(Some("old".into()));
        s.api.transport().mock_response(
            HttpMethod::Get,
            "/auth/me",
            401,
            json!({"message": "Token is not valid"}),
        );
        let store = MemoryTokenStore::with_token("old");

        let err = s.api.auth().me().await.unwrap_err();
        let next = s.expire(&store, &err).unwrap();
        assert!(!next.is_authenticated());
        assert_eq!(next.api.token(), None);
        assert_eq!(*store.token.borrow(), None);
    }

    #[test]
    fn test_other_errors_keep_session() {
        let s = with_user(Role::Student);
        let store = MemoryTokenStore::with_token("jwt");

        let forbidden = ApiError::from_response(403, r#"{"message":"Access denied"}"#);
        assert!(s.expire(&store, &forbidden).is_none());
        assert!(s.expire(&store, &ApiError::Network("offline".into())).is_none());
        assert!(session().expire(&store, &ApiError::from_response(401, "")).is_none());
        assert_eq!(store.token.borrow().as_deref(), Some("jwt"));
    }

    #[tokio::test]
    async fn test_network_error_propagates() {
        let s = session();
        s.api.transport().set_offline(true);
        let store = MemoryTokenStore::default();
        assert!(matches!(
            s.login(&store, "a", "b").await,
            Err(ApiError::Network(_))
        ));
    }
}
