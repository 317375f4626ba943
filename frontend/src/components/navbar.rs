use crate::auth::{logout, use_auth};
use crate::components::notification_bell::NotificationBell;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use ocms_shared::Role;

fn role_badge(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge-error badge-sm",
        Role::Instructor => "badge badge-secondary badge-sm",
        Role::Student => "badge badge-success badge-sm",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let user = move || auth.state.with(|s| s.user.clone());
    let role = move || auth.role();
    // 管理员同样可见讲师菜单
    let teaches = move || auth.check_access(Some(Role::Instructor));

    let on_logout = move |_| {
        logout(&auth);
        router.push(AppRoute::Home);
    };

    view! {
        <div class="navbar bg-base-100 shadow">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Dashboard class="btn btn-ghost text-xl text-primary">"OCMS"</Link>
                <Show when=move || user().is_some()>
                    <ul class="menu menu-horizontal px-1 hidden md:flex">
                        <li><Link to=AppRoute::Dashboard>"Dashboard"</Link></li>
                        <Show when=move || role() == Some(Role::Student)>
                            <li><Link to=AppRoute::Courses>"Browse Courses"</Link></li>
                            <li><Link to=AppRoute::StudentAssignments>"Assignments"</Link></li>
                        </Show>
                        <Show when=teaches>
                            <li><Link to=AppRoute::InstructorCourses>"My Courses"</Link></li>
                            <li><Link to=AppRoute::InstructorAssignments>"My Assignments"</Link></li>
                            <li><Link to=AppRoute::CreateAnnouncement>"Announcements"</Link></li>
                        </Show>
                        <li><Link to=AppRoute::Messages>"Messages"</Link></li>
                    </ul>
                </Show>
            </div>
            <div class="flex-none gap-3">
                {move || match user() {
                    Some(u) => {
                        let initial = u.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
                        view! {
                            <NotificationBell />
                            <div class="text-right hidden sm:block">
                                <p class="text-sm font-medium">{u.name.clone()}</p>
                                <span class=role_badge(u.role)>{u.role.label()}</span>
                            </div>
                            <div class="avatar placeholder">
                                <div class="bg-primary text-primary-content w-9 rounded-full">
                                    <span>{initial}</span>
                                </div>
                            </div>
                            <button class="btn btn-outline btn-error btn-sm" on:click=on_logout>"Logout"</button>
                        }
                        .into_any()
                    }
                    None => view! {
                        <Link to=AppRoute::Courses class="btn btn-ghost btn-sm">"Courses"</Link>
                        <Link to=AppRoute::Login class="btn btn-ghost btn-sm">"Sign in"</Link>
                        <Link to=AppRoute::Register class="btn btn-primary btn-sm">"Register"</Link>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
