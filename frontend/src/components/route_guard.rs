//! 路由守卫组件
//!
//! 决策由 `guard::evaluate` 在 Memo 中计算，重定向只在 Effect 中执行，
//! 因此每次相关状态变化只触发一次跳转。

use crate::auth::use_auth;
use crate::components::common::Loading;
use crate::guard::{GuardDecision, evaluate};
use crate::web::router::use_router;
use leptos::logging::log;
use leptos::prelude::*;
use ocms_shared::Role;

#[component]
pub fn RouteGuard(
    /// 需要的角色；`None` 表示登录即可
    #[prop(default = None)]
    role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let decision = Memo::new(move |_| auth.state.with(|s| evaluate(s, role)));

    Effect::new(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            log!("[Router] Guard redirect to {}", target);
            router.replace(target);
        }
    });

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Pending => view! { <Loading /> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
