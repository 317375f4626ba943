use crate::auth::use_auth;
use crate::components::common::{ErrorBanner, Loading};
use crate::forms::AssignmentForm;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::date::{self, to_input_value};
use ocms_shared::{AssignmentType, Course};

#[component]
pub fn CreateAssignmentPage(course_id: Option<String>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let form = RwSignal::new(AssignmentForm::for_course(course_id));
    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match api.courses().mine().await {
            Ok(list) => set_courses.set(list),
            Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load courses"))),
        }
        set_loading.set(false);
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = match form.with_untracked(|f| f.to_draft()) {
            Ok(d) => d,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_submitting.set(true);
        set_error.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.assignments().create(draft).await {
                Ok(_) => router.push(AppRoute::InstructorAssignments),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to create assignment"))),
            }
            set_submitting.set(false);
        });
    };

    let min_due = to_input_value(date::now());

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-6">
            <Link to=AppRoute::InstructorAssignments class="link link-hover text-sm">"← Back to Assignments"</Link>
            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading courses..." /> }>
                <div class="card bg-base-100 shadow">
                    <form class="card-body space-y-4" on:submit=on_submit>
                        <h1 class="text-2xl font-bold">"Create Assignment"</h1>
                        <ErrorBanner message=error />

                        <div class="form-control">
                            <label class="label" for="course"><span class="label-text">"Course *"</span></label>
                            <select id="course" required class="select select-bordered"
                                on:change=move |ev| form.update(|f| f.course_id = event_target_value(&ev))
                            >
                                <option value="">"Select a course"</option>
                                <For
                                    each=move || courses.get()
                                    key=|c| c.id.clone()
                                    children=move |c: Course| {
                                        let id = c.id.clone();
                                        let value = id.clone();
                                        view! {
                                            <option value=value selected=move || form.with(|f| f.course_id == id)>
                                                {c.title}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="title"><span class="label-text">"Title *"</span></label>
                            <input id="title" type="text" required class="input input-bordered"
                                prop:value=move || form.with(|f| f.title.clone())
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="description"><span class="label-text">"Description *"</span></label>
                            <textarea id="description" rows="3" required class="textarea textarea-bordered"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="grid md:grid-cols-3 gap-4">
                            <div class="form-control">
                                <label class="label" for="due_date"><span class="label-text">"Due Date *"</span></label>
                                <input id="due_date" type="datetime-local" required class="input input-bordered"
                                    min=min_due.clone()
                                    prop:value=move || form.with(|f| f.due_date.clone())
                                    on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="max_points"><span class="label-text">"Max Points *"</span></label>
                                <input id="max_points" type="number" min="1" required class="input input-bordered"
                                    prop:value=move || form.with(|f| f.max_points.clone())
                                    on:input=move |ev| form.update(|f| f.max_points = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="assignment_type"><span class="label-text">"Type"</span></label>
                                <select id="assignment_type" class="select select-bordered"
                                    on:change=move |ev| {
                                        if let Some(t) = AssignmentType::parse(&event_target_value(&ev)) {
                                            form.update(|f| f.assignment_type = t);
                                        }
                                    }
                                >
                                    {AssignmentType::ALL
                                        .into_iter()
                                        .map(|t| view! {
                                            <option value=t.as_str() selected=move || form.with(|f| f.assignment_type == t)>
                                                {t.label()}
                                            </option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label" for="instructions"><span class="label-text">"Instructions"</span></label>
                            <textarea id="instructions" rows="6" class="textarea textarea-bordered"
                                prop:value=move || form.with(|f| f.instructions.clone())
                                on:input=move |ev| form.update(|f| f.instructions = event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="card-actions justify-end">
                            <Link to=AppRoute::InstructorAssignments class="btn btn-ghost">"Cancel"</Link>
                            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Creating..." } else { "Create Assignment" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
