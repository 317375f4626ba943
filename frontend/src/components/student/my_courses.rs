use crate::auth::use_auth;
use crate::components::common::{EmptyState, ErrorBanner, Loading, confirm};
use crate::forms::parse_progress;
use crate::state::{InFlight, replace_by_id};
use crate::stats::progress_color;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Enrollment;
use ocms_shared::date::format_opt;

#[component]
pub fn MyCoursesPage() -> impl IntoView {
    let auth = use_auth();
    let (enrollments, set_enrollments) = signal(Vec::<Enrollment>::new());
    let busy = RwSignal::new(InFlight::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match api.enrollments().mine().await {
            Ok(list) => set_enrollments.set(list),
            Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load your courses"))),
        }
        set_loading.set(false);
    });

    let on_unenroll = move |course_id: String| {
        if !confirm("Are you sure you want to unenroll from this course?") {
            return;
        }
        if !busy.try_update(|b| b.begin(&course_id)).unwrap_or(false) {
            return;
        }
        let api = auth.api();
        spawn_local(async move {
            match api.enrollments().unenroll(&course_id).await {
                Ok(_) => set_enrollments.update(|list| list.retain(|e| e.course_id() != course_id)),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to unenroll from course"))),
            }
            busy.update(|b| b.finish(&course_id));
        });
    };

    let on_progress = move |enrollment_id: String, input: String| {
        let progress = match parse_progress(&input) {
            Ok(p) => p,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        if !busy.try_update(|b| b.begin(&enrollment_id)).unwrap_or(false) {
            return;
        }
        set_error.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.enrollments().update_progress(&enrollment_id, progress).await {
                Ok(updated) => set_enrollments.update(|list| {
                    replace_by_id(list, updated);
                }),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to update progress"))),
            }
            busy.update(|b| b.finish(&enrollment_id));
        });
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"My Courses"</h1>
                <p class="text-base-content/70">"Continue learning from your enrolled courses"</p>
            </div>
            <ErrorBanner message=error />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading your courses..." /> }>
                <Show
                    when=move || enrollments.with(|e| !e.is_empty())
                    fallback=|| view! {
                        <EmptyState icon="📚" message="No courses enrolled. Browse our course catalog to find interesting courses.">
                            <Link to=AppRoute::Courses class="btn btn-primary">"Browse Courses"</Link>
                        </EmptyState>
                    }
                >
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || enrollments.get()
                            key=|e| (e.id.clone(), e.progress.to_bits(), e.completed)
                            children=move |e: Enrollment| {
                                let course_id = e.course_id().to_string();
                                let enrollment_id = e.id.clone();
                                let detail = AppRoute::CourseDetail { id: course_id.clone() };
                                let title = e.course.title.clone();
                                let (draft, set_draft) = signal(format!("{}", e.progress.round() as i64));
                                let row_busy = Memo::new({
                                    let (a, b) = (course_id.clone(), enrollment_id.clone());
                                    move |_| busy.with(|f| f.contains(&a) || f.contains(&b))
                                });
                                view! {
                                    <div class="card bg-base-100 shadow-xl">
                                        <div class="card-body">
                                            <div class="flex justify-between items-start">
                                                <Link to=detail class="card-title link link-hover">
                                                    {title}
                                                </Link>
                                                {e.completed.then(|| view! { <span class="badge badge-success">"Completed"</span> })}
                                            </div>
                                            <p class="text-sm text-base-content/70 line-clamp-2">{e.course.description.clone()}</p>
                                            <p class="text-xs text-base-content/50">"Enrolled " {format_opt(e.enrolled_at)}</p>
                                            <div>
                                                <div class="flex justify-between text-sm">
                                                    <span>"Progress"</span>
                                                    <span>{format!("{:.0}%", e.progress)}</span>
                                                </div>
                                                <progress class=format!("progress w-full {}", progress_color(e.progress)) value=e.progress max="100"></progress>
                                            </div>
                                            <div class="join w-full">
                                                <input type="number" min="0" max="100"
                                                    class="input input-bordered input-sm join-item w-24"
                                                    prop:value=draft
                                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                                />
                                                <button class="btn btn-sm join-item"
                                                    disabled=move || row_busy.get()
                                                    on:click={
                                                        let id = enrollment_id.clone();
                                                        move |_| on_progress(id.clone(), draft.get())
                                                    }
                                                >"Update"</button>
                                            </div>
                                            <div class="card-actions justify-end">
                                                <button class="btn btn-outline btn-error btn-sm"
                                                    disabled=move || row_busy.get()
                                                    on:click=move |_| on_unenroll(course_id.clone())
                                                >"Unenroll"</button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
