use crate::auth::use_auth;
use crate::components::common::{ErrorBanner, Loading, StatCard};
use crate::loaders::{StudentOverview, load_student_overview};
use crate::stats::{StudentStats, format_points};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::date::format_opt;
use ocms_shared::{Submission, SubmissionStatus};

fn status_badge(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Graded => "badge badge-success",
        SubmissionStatus::Submitted => "badge badge-info",
        _ => "badge badge-ghost",
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let (overview, set_overview) = signal(StudentOverview::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match load_student_overview(&api).await {
            Ok(data) => set_overview.set(data),
            Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load dashboard data"))),
        }
        set_loading.set(false);
    });

    let stats = Memo::new(move |_| overview.with(|o| StudentStats::compute(&o.enrollments, &o.submissions)));
    let recent = move || overview.with(|o| o.submissions.iter().take(3).cloned().collect::<Vec<_>>());
    let name = move || auth.state.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Welcome back, " {name} "!"</h1>
                <p class="text-base-content/70">"Here's what's happening with your courses today."</p>
            </div>
            <ErrorBanner message=error />

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard title="Enrolled Courses" icon="📚" value=Signal::derive(move || stats.get().enrolled.to_string()) />
                    <StatCard title="Awaiting Grade" icon="📝" value=Signal::derive(move || stats.get().awaiting_grade.to_string()) />
                    <StatCard title="Completed Courses" icon="✅" value=Signal::derive(move || stats.get().completed.to_string()) />
                    <StatCard
                        title="Average Grade"
                        icon="📊"
                        value=Signal::derive(move || stats.get().average_grade.map(|g| format!("{}%", g)).unwrap_or_else(|| "-".into()))
                    />
                </div>

                <div class="grid lg:grid-cols-3 gap-6">
                    <div class="card bg-base-100 shadow lg:col-span-2">
                        <div class="card-body">
                            <div class="flex justify-between items-center">
                                <h2 class="card-title">"Recent Activity"</h2>
                                <Link to=AppRoute::StudentAssignments class="link link-primary text-sm">"View All"</Link>
                            </div>
                            <Show
                                when=move || overview.with(|o| !o.submissions.is_empty())
                                fallback=|| view! { <p class="text-center py-6 text-base-content/50">"No recent activity"</p> }
                            >
                                <ul class="divide-y divide-base-200">
                                    {move || recent().into_iter().map(activity_row).collect_view()}
                                </ul>
                            </Show>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">"Quick Actions"</h2>
                            <Link to=AppRoute::Courses class="btn btn-outline justify-start">"🔍 Browse Courses"</Link>
                            <Link to=AppRoute::StudentAssignments class="btn btn-outline justify-start">"📝 Assignments"</Link>
                            <Link to=AppRoute::StudentCourses class="btn btn-outline justify-start">"📖 My Courses"</Link>
                            <Link to=AppRoute::Messages class="btn btn-outline justify-start">"💬 Messages"</Link>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn activity_row(s: Submission) -> impl IntoView {
    view! {
        <li class="py-3 flex items-center gap-3">
            <div class="text-2xl">"📝"</div>
            <div class="flex-1">
                <p class="font-medium">"Submitted " {s.assignment_title().to_string()}</p>
                <p class="text-xs text-base-content/50">{s.course_title().to_string()} " · " {format_opt(s.submitted_at)}</p>
                {s.grade.map(|g| view! {
                    <p class="text-sm text-success">"Grade: " {format_points(g)} "/" {s.max_points}</p>
                })}
            </div>
            <span class=status_badge(s.status)>{s.status.label()}</span>
        </li>
    }
}
