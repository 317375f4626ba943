use crate::auth::use_auth;
use crate::components::common::{ErrorBanner, Loading, StatCard};
use crate::loaders::{InstructorOverview, load_instructor_overview};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Submission;
use ocms_shared::date::format_opt;

#[component]
pub fn InstructorDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let (overview, set_overview) = signal(Option::<InstructorOverview>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match load_instructor_overview(&api).await {
            Ok(o) => set_overview.set(Some(o)),
            Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load dashboard data"))),
        }
        set_loading.set(false);
    });

    let stat = move |f: fn(&InstructorOverview) -> String| {
        Signal::derive(move || overview.with(|o| o.as_ref().map(f).unwrap_or_else(|| "0".into())))
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Instructor Dashboard"</h1>
                <p class="text-base-content/70">"Manage your courses and track student progress."</p>
            </div>
            <ErrorBanner message=error />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading dashboard..." /> }>
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard title="My Courses" icon="📚" value=stat(|o| o.stats.total_courses.to_string()) />
                    <StatCard title="Total Students" icon="👥" value=stat(|o| o.stats.total_students.to_string()) />
                    <StatCard title="Assignments to Grade" icon="📝" value=stat(|o| o.stats.assignments_to_grade.to_string()) />
                    <StatCard
                        title="Course Rating"
                        icon="⭐"
                        value=Signal::derive(move || overview.with(|o| {
                            match o.as_ref().and_then(|o| o.stats.average_rating.clone()) {
                                Some(r) => format!("{}/5", r),
                                None => "-/5".to_string(),
                            }
                        }))
                    />
                </div>

                <div class="grid lg:grid-cols-3 gap-6">
                    <div class="card bg-base-100 shadow lg:col-span-2">
                        <div class="card-body">
                            <h2 class="card-title">"Recent Submissions"</h2>
                            {move || {
                                let recent = overview.with(|o| o.as_ref().map(|o| o.recent.clone()).unwrap_or_default());
                                if recent.is_empty() {
                                    view! { <p class="text-center py-6 text-base-content/50">"No recent submissions"</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="divide-y divide-base-200">
                                            {recent.into_iter().map(submission_row).collect_view()}
                                        </ul>
                                    }
                                    .into_any()
                                }
                            }}
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">"Quick Actions"</h2>
                            <Link to=AppRoute::CreateCourse class="btn btn-outline justify-start">"➕ Create Course"</Link>
                            <Link to=AppRoute::InstructorCourses class="btn btn-outline justify-start">"📚 Manage Courses"</Link>
                            <Link to={AppRoute::CreateAssignment { course_id: None }} class="btn btn-outline justify-start">"📝 Create Assignment"</Link>
                            <Link to=AppRoute::InstructorAssignments class="btn btn-outline justify-start">"✅ Grade Assignments"</Link>
                            <Link to=AppRoute::CreateAnnouncement class="btn btn-outline justify-start">"📢 Post Announcement"</Link>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn submission_row(s: Submission) -> impl IntoView {
    let grading = AppRoute::GradeSubmissions { assignment_id: s.assignment_id().to_string() };
    view! {
        <li class="py-3 flex items-center gap-3">
            <div class="avatar placeholder">
                <div class="bg-neutral text-neutral-content w-10 rounded-full">
                    <span>{s.student_name().chars().next().unwrap_or('?').to_string()}</span>
                </div>
            </div>
            <div class="flex-1">
                <p class="font-medium">{s.student_name().to_string()}</p>
                <p class="text-sm text-base-content/70">{s.assignment_title().to_string()} " · " {s.course_title().to_string()}</p>
                <p class="text-xs text-base-content/50">{format_opt(s.submitted_at)}</p>
            </div>
            {if s.is_awaiting_grade() {
                view! { <Link to=grading class="btn btn-primary btn-xs">"Grade"</Link> }.into_any()
            } else {
                view! { <span class="badge badge-success">{s.status.label()}</span> }.into_any()
            }}
        </li>
    }
}
