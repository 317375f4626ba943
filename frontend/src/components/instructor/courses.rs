use crate::auth::use_auth;
use crate::components::common::{EmptyState, ErrorBanner, Loading, PageHeader, StatCard};
use crate::forms::level_label;
use crate::state::{InFlight, replace_by_id};
use crate::stats::{CourseTotals, category_badge, format_category};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Course;
use ocms_shared::date::format_opt;

#[component]
pub fn InstructorCoursesPage() -> impl IntoView {
    let auth = use_auth();
    let (courses, set_courses) = signal(Vec::<Course>::new());
    let publishing = RwSignal::new(InFlight::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match api.courses().mine().await {
            Ok(list) => set_courses.set(list),
            Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load courses"))),
        }
        set_loading.set(false);
    });

    let on_toggle = move |course_id: String| {
        if !publishing.try_update(|p| p.begin(&course_id)).unwrap_or(false) {
            return;
        }
        set_error.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.courses().toggle_publish(&course_id).await {
                Ok(res) => set_courses.update(|list| {
                    replace_by_id(list, res.course);
                }),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to update course status"))),
            }
            publishing.update(|p| p.finish(&course_id));
        });
    };

    let totals = Memo::new(move |_| courses.with(|c| CourseTotals::from_courses(c)));

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <PageHeader title="My Courses" subtitle="Manage and create your courses">
                <Link to=AppRoute::CreateCourse class="btn btn-primary">"Create New Course"</Link>
            </PageHeader>
            <ErrorBanner message=error />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading courses..." /> }>
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard title="Total Courses" icon="📚" value=Signal::derive(move || totals.get().total.to_string()) />
                    <StatCard title="Published" icon="✅" value=Signal::derive(move || totals.get().published.to_string()) />
                    <StatCard title="Drafts" icon="📝" value=Signal::derive(move || totals.get().drafts.to_string()) />
                    <StatCard title="Total Students" icon="👥" value=Signal::derive(move || totals.get().students.to_string()) />
                </div>

                <Show
                    when=move || courses.with(|c| !c.is_empty())
                    fallback=|| view! {
                        <EmptyState icon="📚" message="You haven't created any courses yet">
                            <Link to=AppRoute::CreateCourse class="btn btn-primary">"Create Your First Course"</Link>
                        </EmptyState>
                    }
                >
                    <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Course"</th>
                                    <th class="hidden md:table-cell">"Category"</th>
                                    <th>"Students"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || courses.get()
                                    key=|c| (c.id.clone(), c.is_published)
                                    children=move |c: Course| {
                                        let id = c.id.clone();
                                        let busy = Memo::new({
                                            let id = id.clone();
                                            move |_| publishing.with(|p| p.contains(&id))
                                        });
                                        let published = c.is_published;
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="font-bold">{c.title.clone()}</div>
                                                    <div class="text-xs text-base-content/50 flex gap-2">
                                                        {(!c.course_code.is_empty()).then(|| view! { <span class="font-mono">{c.course_code.clone()}</span> })}
                                                        {level_label(&c.level).map(|l| view! { <span>{l}</span> })}
                                                        <span>"Created " {format_opt(c.created_at)}</span>
                                                    </div>
                                                </td>
                                                <td class="hidden md:table-cell">
                                                    <span class=category_badge(&c.category)>{format_category(&c.category)}</span>
                                                </td>
                                                <td>{c.student_count.unwrap_or(0)}</td>
                                                <td>
                                                    <span class=if published { "badge badge-success" } else { "badge badge-warning" }>
                                                        {if published { "Published" } else { "Draft" }}
                                                    </span>
                                                </td>
                                                <td class="flex flex-wrap gap-1 justify-end">
                                                    <button
                                                        class=if published { "btn btn-outline btn-xs" } else { "btn btn-success btn-xs" }
                                                        disabled=move || busy.get()
                                                        on:click={
                                                            let id = id.clone();
                                                            move |_| on_toggle(id.clone())
                                                        }
                                                    >
                                                        {move || match (busy.get(), published) {
                                                            (true, _) => "Updating...",
                                                            (false, true) => "Unpublish",
                                                            (false, false) => "Publish",
                                                        }}
                                                    </button>
                                                    <Link to={AppRoute::CourseAnalytics { id: id.clone() }} class="btn btn-ghost btn-xs">"Analytics"</Link>
                                                    <Link to={AppRoute::CourseMaterials { course_id: id.clone() }} class="btn btn-ghost btn-xs">"Materials"</Link>
                                                    <Link to={AppRoute::CreateAssignment { course_id: Some(id.clone()) }} class="btn btn-ghost btn-xs">"+ Assignment"</Link>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
