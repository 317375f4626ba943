use crate::auth::use_auth;
use crate::components::common::ErrorBanner;
use crate::forms::{CATEGORIES, CourseForm, CourseList, LEVELS};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CreateCoursePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let form = RwSignal::new(CourseForm::default());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

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
            match api.courses().create(draft).await {
                Ok(_) => router.push(AppRoute::InstructorCourses),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to create course"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
            <Link to=AppRoute::InstructorCourses class="link link-hover text-sm">"← Back to Courses"</Link>
            <div class="card bg-base-100 shadow">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <h1 class="text-2xl font-bold">"Create New Course"</h1>
                    <ErrorBanner message=error />

                    <div class="form-control">
                        <label class="label" for="title"><span class="label-text">"Course Title *"</span></label>
                        <input id="title" type="text" required class="input input-bordered"
                            placeholder="e.g., Introduction to Algorithms"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </div>
                    <div class="grid md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="course_code"><span class="label-text">"Course Code *"</span></label>
                            <input id="course_code" type="text" required class="input input-bordered"
                                placeholder="e.g., CS101, MATH201"
                                prop:value=move || form.with(|f| f.course_code.clone())
                                on:input=move |ev| form.update(|f| f.course_code = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="level"><span class="label-text">"Course Level *"</span></label>
                            <select id="level" required class="select select-bordered"
                                on:change=move |ev| form.update(|f| f.level = event_target_value(&ev))
                            >
                                <option value="">"Select course level"</option>
                                {LEVELS
                                    .iter()
                                    .map(|(value, label)| view! {
                                        <option value=*value selected=move || form.with(|f| f.level == *value)>{*label}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="form-control">
                        <label class="label" for="description"><span class="label-text">"Description *"</span></label>
                        <textarea id="description" rows="4" required class="textarea textarea-bordered"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="grid md:grid-cols-3 gap-4">
                        <div class="form-control">
                            <label class="label" for="category"><span class="label-text">"Department *"</span></label>
                            <select id="category" required class="select select-bordered"
                                on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            >
                                <option value="">"Select department"</option>
                                {CATEGORIES
                                    .iter()
                                    .map(|(value, label)| view! {
                                        <option value=*value selected=move || form.with(|f| f.category == *value)>{*label}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="price"><span class="label-text">"Price"</span></label>
                            <input id="price" type="number" min="0" step="0.01" class="input input-bordered"
                                prop:value=move || form.with(|f| f.price.clone())
                                on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="image"><span class="label-text">"Image URL"</span></label>
                            <input id="image" type="url" class="input input-bordered"
                                prop:value=move || form.with(|f| f.image_url.clone())
                                on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    {CourseList::ALL.into_iter().map(|list| view! { <ListEditor form=form list=list /> }).collect_view()}

                    <div class="card-actions justify-end">
                        <Link to=AppRoute::InstructorCourses class="btn btn-ghost">"Cancel"</Link>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creating..." } else { "Create Course" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// 可增删的文本列表；空项在提交时丢弃
#[component]
fn ListEditor(form: RwSignal<CourseForm>, list: CourseList) -> impl IntoView {
    // 只在条目数变化时重建输入框，避免输入时失去焦点
    let len = Memo::new(move |_| form.with(|f| list.entries(f).len()));

    view! {
        <fieldset class="space-y-2">
            <legend class="label-text font-semibold">{list.label()}</legend>
            {move || {
                (0..len.get())
                    .map(|i| view! {
                        <div class="join w-full">
                            <input type="text" class="input input-bordered input-sm join-item flex-1"
                                prop:value=move || form.with(|f| list.entries(f).get(i).cloned().unwrap_or_default())
                                on:input=move |ev| form.update(|f| {
                                    if let Some(slot) = list.entries_mut(f).get_mut(i) {
                                        *slot = event_target_value(&ev);
                                    }
                                })
                            />
                            <button type="button" class="btn btn-sm join-item"
                                disabled=move || { len.get() <= 1 }
                                on:click=move |_| form.update(|f| {
                                    let entries = list.entries_mut(f);
                                    if entries.len() > 1 && i < entries.len() {
                                        entries.remove(i);
                                    }
                                })
                            >"✕"</button>
                        </div>
                    })
                    .collect_view()
            }}
            <button type="button" class="btn btn-ghost btn-xs"
                on:click=move |_| form.update(|f| list.entries_mut(f).push(String::new()))
            >"+ Add"</button>
        </fieldset>
    }
}
