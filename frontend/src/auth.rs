//! 认证模块
//!
//! 把 [`SessionState`] 放进信号对并通过 Context 共享。
//! 认证操作是会话的唯一写入方：计算下一个状态后整体写回。
//! 路由服务只读取注入的信号，不依赖本模块。

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::{BrowserTokenStore, SessionState};
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Role;
use ocms_shared::protocol::RegisterRequest;

/// 浏览器中的会话状态
pub type AuthState = SessionState;

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
    store: StoredValue<BrowserTokenStore>,
}

impl AuthContext {
    /// 创建新的认证上下文 (匿名、加载中)
    pub fn new(config: &AppConfig) -> Self {
        let initial = SessionState::new(ApiClient::browser(&config.api_url));
        let (state, set_state) = signal(initial);
        Self {
            state,
            set_state,
            store: StoredValue::new(BrowserTokenStore::new(config.token_key.clone())),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_authenticated()))
    }

    /// 会话是否仍在首次校验
    pub fn is_loading_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading))
    }

    /// 当前 API 客户端 (不追踪)
    pub fn api(&self) -> ApiClient {
        self.state.with_untracked(|s| s.api.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.state.with(|s| s.role())
    }

    pub fn check_access(&self, required: Option<Role>) -> bool {
        self.state.with(|s| s.check_access(required))
    }

    /// 令牌失效 (401) 时清除会话，路由服务随后跳转登录页
    pub fn report(&self, err: &ApiError) {
        let next = self.state.with_untracked(|s| s.expire(&self.store(), err));
        if let Some(next) = next {
            warn!("[Auth] Session expired: {}", err);
            self.set_state.set(next);
        }
    }

    /// 页面横幅文本，顺带处理令牌失效
    pub fn error_message(&self, err: &ApiError, fallback: &str) -> String {
        self.report(err);
        err.user_message(fallback)
    }

    fn store(&self) -> BrowserTokenStore {
        self.store.get_value()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 若 localStorage 中存在 token，则请求 `/auth/me` 校验；否则立即结束加载。
pub fn init_auth(ctx: &AuthContext) {
    let ctx = *ctx;
    let current = ctx.state.get_untracked();
    spawn_local(async move {
        let next = current.restore(&ctx.store()).await;
        if let Some(user) = &next.user {
            log!("[Auth] Session restored for {} ({})", user.email, user.role);
        }
        ctx.set_state.set(next);
    });
}

/// 登录并保存 token
pub async fn login(ctx: &AuthContext, email: String, password: String) -> ApiResult<()> {
    let current = ctx.state.get_untracked();
    let next = current.login(&ctx.store(), &email, &password).await?;
    ctx.set_state.set(next);
    Ok(())
}

/// 注册并直接登录
pub async fn register(ctx: &AuthContext, req: RegisterRequest) -> ApiResult<()> {
    let current = ctx.state.get_untracked();
    let next = current.register(&ctx.store(), &req).await?;
    ctx.set_state.set(next);
    Ok(())
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    let next = ctx.state.with_untracked(|s| s.logout(&ctx.store()));
    ctx.set_state.set(next);
    log!("[Auth] Logged out");
}
