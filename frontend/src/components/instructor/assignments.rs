use crate::auth::use_auth;
use crate::components::common::{EmptyState, ErrorBanner, Loading, PageHeader};
use crate::config::use_config;
use crate::loaders::{InstructorAssignments, load_instructor_assignments};
use crate::state::{InFlight, replace_by_id};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Assignment;
use ocms_shared::date::{self, format_date_time};

#[component]
pub fn InstructorAssignmentsPage() -> impl IntoView {
    let auth = use_auth();
    let limit = use_config().fan_out_limit;
    let (data, set_data) = signal(InstructorAssignments::default());
    let publishing = RwSignal::new(InFlight::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match load_instructor_assignments(&api, limit).await {
            Ok(d) => set_data.set(d),
            Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load assignments"))),
        }
        set_loading.set(false);
    });

    let on_toggle = move |id: String| {
        if !publishing.try_update(|p| p.begin(&id)).unwrap_or(false) {
            return;
        }
        set_error.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.assignments().toggle_publish(&id).await {
                Ok(res) => set_data.update(|d| {
                    replace_by_id(&mut d.assignments, res.assignment);
                }),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to update assignment status"))),
            }
            publishing.update(|p| p.finish(&id));
        });
    };

    // 课程未 populate 时回退到已加载的课程列表
    let course_title = move |a: &Assignment| -> String {
        a.course_title().map(str::to_string).unwrap_or_else(|| {
            data.with_untracked(|d| {
                d.courses
                    .iter()
                    .find(|c| c.id == a.course_id())
                    .map(|c| c.title.clone())
                    .unwrap_or_else(|| "Course".to_string())
            })
        })
    };

    view! {
        <div class="max-w-6xl mx-auto p-4 md:p-8 space-y-6">
            <PageHeader title="Assignments" subtitle="Assignments across all your courses">
                <Link to={AppRoute::CreateAssignment { course_id: None }} class="btn btn-primary">"Create Assignment"</Link>
            </PageHeader>
            <ErrorBanner message=error />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading assignments..." /> }>
                <Show
                    when=move || data.with(|d| !d.assignments.is_empty())
                    fallback=move || {
                        if data.with(|d| d.courses.is_empty()) {
                            view! {
                                <EmptyState icon="📚" message="Create a course before adding assignments">
                                    <Link to=AppRoute::CreateCourse class="btn btn-primary">"Create Course"</Link>
                                </EmptyState>
                            }
                            .into_any()
                        } else {
                            view! { <EmptyState icon="📝" message="No assignments yet" /> }.into_any()
                        }
                    }
                >
                    <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                        <table class="table w-full">
                            <thead>
                                <tr>
                                    <th>"Assignment"</th>
                                    <th class="hidden md:table-cell">"Course"</th>
                                    <th>"Due"</th>
                                    <th>"Points"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || data.get().assignments
                                    key=|a| (a.id.clone(), a.is_published)
                                    children=move |a: Assignment| {
                                        let id = StoredValue::new(a.id.clone());
                                        let busy = Memo::new(move |_| publishing.with(|p| p.contains(&id.get_value())));
                                        let published = a.is_published;
                                        let overdue = date::is_past_due(a.due_date, date::now());
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="font-bold">{a.assignment_type.icon()} " " {a.title.clone()}</div>
                                                    <div class="text-xs text-base-content/50">{a.assignment_type.label()}</div>
                                                </td>
                                                <td class="hidden md:table-cell">{course_title(&a)}</td>
                                                <td class=if overdue { "text-error" } else { "" }>{format_date_time(a.due_date)}</td>
                                                <td>{a.max_points}</td>
                                                <td>
                                                    <span class=if published { "badge badge-success" } else { "badge badge-warning" }>
                                                        {if published { "Published" } else { "Draft" }}
                                                    </span>
                                                </td>
                                                <td class="flex gap-1 justify-end">
                                                    <button
                                                        class=if published { "btn btn-outline btn-xs" } else { "btn btn-success btn-xs" }
                                                        disabled=move || busy.get()
                                                        on:click=move |_| on_toggle(id.get_value())
                                                    >
                                                        {move || match (busy.get(), published) {
                                                            (true, _) => "Updating...",
                                                            (false, true) => "Unpublish",
                                                            (false, false) => "Publish",
                                                        }}
                                                    </button>
                                                    <Link to={AppRoute::GradeSubmissions { assignment_id: id.get_value() }} class="btn btn-ghost btn-xs">
                                                        "Submissions"
                                                    </Link>
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
