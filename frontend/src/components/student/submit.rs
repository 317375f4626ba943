//! 作业提交
//!
//! 截止判断使用本次加载得到的截止时间；过期后表单禁用，提交也会被拒绝。

use crate::auth::use_auth;
use crate::components::common::{ErrorBanner, Loading, NotFoundPage};
use crate::forms::submission_draft;
use crate::loaders::load_error_message;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Assignment;
use ocms_shared::date::{self, format_date_time, is_past_due};

#[component]
pub fn SubmitAssignmentPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let assignment_id = StoredValue::new(id);

    let (assignment, set_assignment) = signal(Option::<Assignment>::None);
    let (not_found, set_not_found) = signal(false);
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);
    let (content, set_content) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match api.assignments().get(&assignment_id.get_value()).await {
            Ok(a) => set_assignment.set(Some(a)),
            Err(e) => {
                set_not_found.set(e.is_not_found());
                auth.report(&e);
                set_error.set(Some(load_error_message(&e, "Assignment")));
            }
        }
        set_loading.set(false);
    });

    let past_due = move || {
        assignment.with(|a| a.as_ref().is_some_and(|a| is_past_due(a.due_date, date::now())))
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(due) = assignment.with_untracked(|a| a.as_ref().map(|a| a.due_date)) else {
            return;
        };
        let draft = match submission_draft(&content.get_untracked(), due, date::now()) {
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
            match api.assignments().submit(&assignment_id.get_value(), draft).await {
                Ok(_) => router.push(AppRoute::StudentAssignments),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to submit assignment"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
            <Link to=AppRoute::StudentAssignments class="link link-hover text-sm">"← Back to Assignments"</Link>

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading assignment..." /> }>
                <Show when=move || !not_found.get() fallback=|| view! { <NotFoundPage what="Assignment" /> }>
                    {move || assignment.get().map(|a| view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h1 class="text-2xl font-bold">{a.title.clone()}</h1>
                                <div class="grid md:grid-cols-3 gap-4 text-sm">
                                    <div><span class="font-semibold">"Course: "</span>{a.course_title().unwrap_or("-").to_string()}</div>
                                    <div><span class="font-semibold">"Due Date: "</span>{format_date_time(a.due_date)}</div>
                                    <div><span class="font-semibold">"Points: "</span>{a.max_points}</div>
                                </div>
                                <h3 class="font-semibold mt-2">"Description"</h3>
                                <p class="whitespace-pre-wrap">{a.description.clone()}</p>
                                {(!a.instructions.is_empty()).then(|| view! {
                                    <h3 class="font-semibold mt-2">"Instructions"</h3>
                                    <p class="whitespace-pre-wrap">{a.instructions.clone()}</p>
                                })}
                            </div>
                        </div>
                    })}

                    <div class="card bg-base-100 shadow">
                        <form class="card-body" on:submit=on_submit>
                            <h2 class="card-title">"Submit Your Work"</h2>
                            <ErrorBanner message=error />
                            <Show when=past_due>
                                <div role="alert" class="alert alert-warning text-sm py-2">
                                    <span>"The due date for this assignment has passed. Submissions are closed."</span>
                                </div>
                            </Show>
                            <textarea
                                class="textarea textarea-bordered w-full"
                                rows="12"
                                required
                                placeholder="Write your assignment submission here..."
                                prop:value=content
                                disabled=past_due
                                on:input=move |ev| set_content.set(event_target_value(&ev))
                            ></textarea>
                            <p class="text-xs text-base-content/50">
                                "You can paste code, include links, or describe your solution in detail."
                            </p>
                            <div class="card-actions justify-end">
                                <Link to=AppRoute::StudentAssignments class="btn btn-ghost">"Cancel"</Link>
                                <button type="submit" class="btn btn-primary" disabled=move || submitting.get() || past_due()>
                                    {move || if submitting.get() { "Submitting..." } else { "Submit Assignment" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
