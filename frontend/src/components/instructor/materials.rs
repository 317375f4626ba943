use crate::auth::use_auth;
use crate::components::common::{EmptyState, ErrorBanner, Loading, NotFoundPage, confirm};
use crate::loaders::{load_course_materials, load_error_message, reorder_payload};
use crate::state::{Direction, InFlight, move_item, remove_by_id, replace_by_id};
use crate::stats::format_file_size;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::{Course, LearningMaterial};

#[component]
pub fn CourseMaterialsPage(course_id: String) -> impl IntoView {
    let auth = use_auth();
    let course_id = StoredValue::new(course_id);
    let (course, set_course) = signal(Option::<Course>::None);
    let (materials, set_materials) = signal(Vec::<LearningMaterial>::new());
    let busy_rows = RwSignal::new(InFlight::default());
    let (reordering, set_reordering) = signal(false);
    let (loading, set_loading) = signal(true);
    let (not_found, set_not_found) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match load_course_materials(&api, &course_id.get_value()).await {
            Ok(data) => {
                set_course.set(Some(data.course));
                set_materials.set(data.materials);
            }
            Err(e) => {
                set_not_found.set(e.is_not_found());
                auth.report(&e);
                set_error.set(Some(load_error_message(&e, "Course")));
            }
        }
        set_loading.set(false);
    });

    let on_toggle = move |id: String| {
        if !busy_rows.try_update(|b| b.begin(&id)).unwrap_or(false) {
            return;
        }
        set_error.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.materials().toggle_publish(&id).await {
                Ok(res) => set_materials.update(|list| {
                    replace_by_id(list, res.material);
                }),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to update material status"))),
            }
            busy_rows.update(|b| b.finish(&id));
        });
    };

    let on_delete = move |id: String| {
        if !confirm("Are you sure you want to delete this material?") {
            return;
        }
        if !busy_rows.try_update(|b| b.begin(&id)).unwrap_or(false) {
            return;
        }
        set_error.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.materials().delete(&id).await {
                Ok(_) => set_materials.update(|list| {
                    remove_by_id(list, &id);
                }),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to delete material"))),
            }
            busy_rows.update(|b| b.finish(&id));
        });
    };

    // 先在副本上交换，后端确认后再提交到列表
    let on_move = move |id: String, direction: Direction| {
        if reordering.get_untracked() {
            return;
        }
        let mut next = materials.get_untracked();
        let Some(index) = next.iter().position(|m| m.id == id) else {
            return;
        };
        if !move_item(&mut next, index, direction) {
            return;
        }
        set_reordering.set(true);
        set_error.set(None);
        let payload = reorder_payload(&next);
        let api = auth.api();
        spawn_local(async move {
            match api.materials().reorder(&course_id.get_value(), payload).await {
                Ok(_) => set_materials.set(next),
                Err(e) => {
                    warn!("[Materials] reorder failed: {}", e);
                    set_error.set(Some(auth.error_message(&e, "Failed to reorder materials")));
                }
            }
            set_reordering.set(false);
        });
    };

    let last_index = Memo::new(move |_| materials.with(|m| m.len().saturating_sub(1)));

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <Link to=AppRoute::InstructorCourses class="link link-hover text-sm">"← Back to Courses"</Link>
            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading materials..." /> }>
                <Show when=move || !not_found.get() fallback=|| view! { <NotFoundPage what="Course" /> }>
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                        <div>
                            <h1 class="text-3xl font-bold">"Course Materials"</h1>
                            <p class="text-base-content/70">
                                {move || course.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default())}
                            </p>
                        </div>
                        <Link to={AppRoute::CreateMaterial { course_id: course_id.get_value() }} class="btn btn-primary">
                            "Add Material"
                        </Link>
                    </div>
                    <ErrorBanner message=error />

                    <Show
                        when=move || materials.with(|m| !m.is_empty())
                        fallback=move || view! {
                            <EmptyState icon="📂" message="No materials yet">
                                <Link to={AppRoute::CreateMaterial { course_id: course_id.get_value() }} class="btn btn-primary">
                                    "Add Your First Material"
                                </Link>
                            </EmptyState>
                        }
                    >
                        <ul class="space-y-3">
                            <For
                                each=move || materials.get().into_iter().enumerate()
                                key=|(i, m)| (*i, m.id.clone(), m.is_published)
                                children=move |(index, m): (usize, LearningMaterial)| {
                                    let id = StoredValue::new(m.id.clone());
                                    let busy = Memo::new(move |_| busy_rows.with(|b| b.contains(&id.get_value())));
                                    let published = m.is_published;
                                    view! {
                                        <li class="card bg-base-100 shadow">
                                            <div class="card-body p-4 flex-row items-center gap-4">
                                                <div class="flex flex-col gap-1">
                                                    <button class="btn btn-ghost btn-xs"
                                                        disabled=move || { reordering.get() || index == 0 }
                                                        on:click=move |_| on_move(id.get_value(), Direction::Up)
                                                    >"▲"</button>
                                                    <button class="btn btn-ghost btn-xs"
                                                        disabled=move || { reordering.get() || index >= last_index.get() }
                                                        on:click=move |_| on_move(id.get_value(), Direction::Down)
                                                    >"▼"</button>
                                                </div>
                                                <div class="text-3xl">{m.material_type.icon()}</div>
                                                <div class="flex-1 min-w-0">
                                                    <div class="font-semibold truncate">{m.title.clone()}</div>
                                                    <div class="text-xs text-base-content/60 flex flex-wrap gap-2">
                                                        <span>{m.material_type.label()}</span>
                                                        {m.file_size.map(|s| view! { <span>{format_file_size(s)}</span> })}
                                                        {m.duration.map(|d| view! { <span>{d} " min"</span> })}
                                                        {m.tags.iter().map(|t| view! { <span class="badge badge-ghost badge-xs">{t.clone()}</span> }).collect_view()}
                                                    </div>
                                                </div>
                                                <span class=if published { "badge badge-success" } else { "badge badge-warning" }>
                                                    {if published { "Published" } else { "Draft" }}
                                                </span>
                                                <div class="flex gap-1">
                                                    <button
                                                        class="btn btn-outline btn-xs"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| on_toggle(id.get_value())
                                                    >
                                                        {if published { "Unpublish" } else { "Publish" }}
                                                    </button>
                                                    <button
                                                        class="btn btn-error btn-outline btn-xs"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| on_delete(id.get_value())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
