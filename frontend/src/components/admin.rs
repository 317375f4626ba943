use crate::auth::use_auth;
use crate::components::common::{ErrorBanner, Loading, PageHeader, StatCard};
use crate::stats::{category_badge, category_breakdown, format_category, instructor_count};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Course;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match api.courses().list().await {
            Ok(list) => set_courses.set(list),
            Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load courses"))),
        }
        set_loading.set(false);
    });

    let instructors = Memo::new(move |_| courses.with(|c| instructor_count(c)));
    let breakdown = Memo::new(move |_| courses.with(|c| category_breakdown(c)));

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <PageHeader title="Admin Dashboard" subtitle="Published catalog overview" />
            <ErrorBanner message=error />

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard title="Published Courses" icon="📚" value=Signal::derive(move || courses.with(|c| c.len()).to_string()) />
                    <StatCard title="Instructors" icon="👩‍🏫" value=Signal::derive(move || instructors.get().to_string()) />
                    <StatCard title="Categories" icon="🏷️" value=Signal::derive(move || breakdown.with(|b| b.len()).to_string()) />
                </div>

                <div class="grid lg:grid-cols-2 gap-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">"Courses by Category"</h2>
                            <ul class="space-y-2">
                                {move || breakdown
                                    .get()
                                    .into_iter()
                                    .map(|(category, count)| view! {
                                        <li class="flex justify-between items-center">
                                            <span class=category_badge(&category)>{format_category(&category)}</span>
                                            <span class="font-semibold">{count}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">"Tools"</h2>
                            <div class="flex flex-col gap-2">
                                <Link to=AppRoute::Courses class="btn btn-outline">"Browse Catalog"</Link>
                                <Link to=AppRoute::InstructorCourses class="btn btn-outline">"Course Management"</Link>
                                <Link to=AppRoute::InstructorAssignments class="btn btn-outline">"Assignments"</Link>
                                <Link to=AppRoute::CreateAnnouncement class="btn btn-outline">"Send Announcement"</Link>
                                <Link to=AppRoute::Messages class="btn btn-outline">"Messages"</Link>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
