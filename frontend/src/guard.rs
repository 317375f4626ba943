//! 路由守卫决策
//!
//! 纯函数，由 `RouteGuard` 组件通过 Memo 调用；重定向在 Effect 中执行。

use crate::session::SessionState;
use crate::web::http::Transport;
use crate::web::route::AppRoute;
use ocms_shared::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 会话仍在校验，显示占位
    Pending,
    Allow,
    Redirect(AppRoute),
}

pub fn evaluate<T: Transport + Clone>(
    session: &SessionState<T>,
    required: Option<Role>,
) -> GuardDecision {
    if session.is_loading {
        return GuardDecision::Pending;
    }
    if !session.is_authenticated() {
        return GuardDecision::Redirect(AppRoute::auth_failure_redirect());
    }
    if required.is_some() && !session.check_access(required) {
        return GuardDecision::Redirect(AppRoute::auth_success_redirect());
    }
    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::web::http::MockTransport;
    use ocms_shared::User;

    fn session(role: Option<Role>, loading: bool) -> SessionState<MockTransport> {
        let mut s = SessionState::new(ApiClient::new("http://x", MockTransport::new("http://x")));
        s.is_loading = loading;
        s.user = role.map(|role| User {
            id: "u".into(),
            name: "U".into(),
            email: "u@example.com".into(),
            role,
        });
        s
    }

    #[test]
    fn test_pending_while_loading() {
        assert_eq!(evaluate(&session(None, true), Some(Role::Student)), GuardDecision::Pending);
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        for required in [None, Some(Role::Student), Some(Role::Instructor), Some(Role::Admin)] {
            assert_eq!(
                evaluate(&session(None, false), required),
                GuardDecision::Redirect(AppRoute::Login)
            );
        }
    }

    #[test]
    fn test_role_mismatch_goes_to_dashboard() {
        assert_eq!(
            evaluate(&session(Some(Role::Student), false), Some(Role::Instructor)),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            evaluate(&session(Some(Role::Instructor), false), Some(Role::Admin)),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
    }

    #[test]
    fn test_admin_always_admitted() {
        for required in [None, Some(Role::Student), Some(Role::Instructor), Some(Role::Admin)] {
            assert_eq!(evaluate(&session(Some(Role::Admin), false), required), GuardDecision::Allow);
        }
    }

    #[test]
    fn test_matching_role_allowed() {
        assert_eq!(
            evaluate(&session(Some(Role::Student), false), Some(Role::Student)),
            GuardDecision::Allow
        );
        assert_eq!(evaluate(&session(Some(Role::Student), false), None), GuardDecision::Allow);
    }
}
