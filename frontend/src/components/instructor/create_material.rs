use crate::auth::use_auth;
use crate::components::common::ErrorBanner;
use crate::forms::{MaterialForm, add_tag};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::{AccessType, MaterialType};

#[component]
pub fn CreateMaterialPage(course_id: String) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let course_id = StoredValue::new(course_id);
    let form = RwSignal::new(MaterialForm::default());
    let (tag_input, set_tag_input) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let material_type = Memo::new(move |_| form.with(|f| f.material_type));

    let on_add_tag = move || {
        let input = tag_input.get_untracked();
        if form.try_update(|f| add_tag(&mut f.tags, &input)).unwrap_or(false) {
            set_tag_input.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = match form.with_untracked(|f| f.to_draft(&course_id.get_value())) {
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
            match api.materials().create(draft).await {
                Ok(_) => router.push(AppRoute::CourseMaterials {
                    course_id: course_id.get_value(),
                }),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to create material"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-6">
            <Link to={AppRoute::CourseMaterials { course_id: course_id.get_value() }} class="link link-hover text-sm">
                "← Back to Materials"
            </Link>
            <div class="card bg-base-100 shadow">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <h1 class="text-2xl font-bold">"Add Learning Material"</h1>
                    <ErrorBanner message=error />

                    <div class="form-control">
                        <label class="label" for="title"><span class="label-text">"Title *"</span></label>
                        <input id="title" type="text" required class="input input-bordered"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="description"><span class="label-text">"Description"</span></label>
                        <textarea id="description" rows="3" class="textarea textarea-bordered"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="grid md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="material_type"><span class="label-text">"Type"</span></label>
                            <select id="material_type" class="select select-bordered"
                                on:change=move |ev| {
                                    if let Some(t) = MaterialType::parse(&event_target_value(&ev)) {
                                        form.update(|f| f.material_type = t);
                                    }
                                }
                            >
                                {MaterialType::ALL
                                    .into_iter()
                                    .map(|t| view! {
                                        <option value=t.as_str() selected=move || material_type.get() == t>
                                            {t.icon()} " " {t.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="access_type"><span class="label-text">"Access"</span></label>
                            <select id="access_type" class="select select-bordered"
                                on:change=move |ev| {
                                    let access = if event_target_value(&ev) == "premium" { AccessType::Premium } else { AccessType::Free };
                                    form.update(|f| f.access_type = access);
                                }
                            >
                                <option value="free" selected=move || form.with(|f| f.access_type == AccessType::Free)>"Free"</option>
                                <option value="premium" selected=move || form.with(|f| f.access_type == AccessType::Premium)>"Premium"</option>
                            </select>
                        </div>
                    </div>

                    <Show when=move || material_type.get() == MaterialType::Link>
                        <div class="form-control">
                            <label class="label" for="external_url"><span class="label-text">"External URL *"</span></label>
                            <input id="external_url" type="url" required class="input input-bordered"
                                placeholder="https://"
                                prop:value=move || form.with(|f| f.external_url.clone())
                                on:input=move |ev| form.update(|f| f.external_url = event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <Show when=move || material_type.get().is_file_based()>
                        <div class="grid md:grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="file_url"><span class="label-text">"File URL"</span></label>
                                <input id="file_url" type="url" class="input input-bordered"
                                    prop:value=move || form.with(|f| f.file_url.clone())
                                    on:input=move |ev| form.update(|f| f.file_url = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="file_name"><span class="label-text">"File Name"</span></label>
                                <input id="file_name" type="text" class="input input-bordered"
                                    prop:value=move || form.with(|f| f.file_name.clone())
                                    on:input=move |ev| form.update(|f| f.file_name = event_target_value(&ev))
                                />
                            </div>
                        </div>
                    </Show>

                    <Show when=move || !material_type.get().is_file_based() && material_type.get() != MaterialType::Link>
                        <div class="form-control">
                            <label class="label" for="content"><span class="label-text">"Content"</span></label>
                            <textarea id="content" rows="6" class="textarea textarea-bordered"
                                prop:value=move || form.with(|f| f.content.clone())
                                on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                            ></textarea>
                        </div>
                    </Show>

                    <div class="grid md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="duration"><span class="label-text">"Duration (minutes)"</span></label>
                            <input id="duration" type="number" min="0" class="input input-bordered"
                                prop:value=move || form.with(|f| f.duration.clone())
                                on:input=move |ev| form.update(|f| f.duration = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="order"><span class="label-text">"Order"</span></label>
                            <input id="order" type="number" class="input input-bordered"
                                prop:value=move || form.with(|f| f.order.clone())
                                on:input=move |ev| form.update(|f| f.order = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="tag"><span class="label-text">"Tags"</span></label>
                        <div class="join">
                            <input id="tag" type="text" class="input input-bordered join-item flex-1"
                                placeholder="Add a tag"
                                prop:value=tag_input
                                on:input=move |ev| set_tag_input.set(event_target_value(&ev))
                                on:keydown=move |ev| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        on_add_tag();
                                    }
                                }
                            />
                            <button type="button" class="btn join-item" on:click=move |_| on_add_tag()>"Add"</button>
                        </div>
                        <div class="flex flex-wrap gap-2 mt-2">
                            <For
                                each=move || form.with(|f| f.tags.clone())
                                key=|t| t.clone()
                                children=move |tag: String| {
                                    let t = tag.clone();
                                    view! {
                                        <span class="badge badge-primary gap-1">
                                            {tag}
                                            <button type="button" class="text-xs"
                                                on:click=move |_| form.update(|f| f.tags.retain(|x| *x != t))
                                            >"✕"</button>
                                        </span>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="card-actions justify-end">
                        <Link to={AppRoute::CourseMaterials { course_id: course_id.get_value() }} class="btn btn-ghost">"Cancel"</Link>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creating..." } else { "Create Material" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
