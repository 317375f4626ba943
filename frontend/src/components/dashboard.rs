//! `/dashboard`：按角色转到对应面板

use crate::auth::use_auth;
use crate::components::common::Loading;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn DashboardRedirect() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    Effect::new(move |_| {
        if let Some(role) = auth.role() {
            router.replace(AppRoute::dashboard_for(role));
        }
    });

    view! { <Loading label="Redirecting to your dashboard..." /> }
}
