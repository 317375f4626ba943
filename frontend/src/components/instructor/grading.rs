use crate::auth::use_auth;
use crate::components::common::{EmptyState, ErrorBanner, Loading, NotFoundPage, SuccessBanner};
use crate::forms::parse_grade;
use crate::loaders::{load_error_message, load_grading};
use crate::state::{InFlight, replace_by_id};
use crate::stats::format_points;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::date::{format_date_time, format_opt};
use ocms_shared::{Assignment, Submission};

#[component]
pub fn GradeSubmissionsPage(assignment_id: String) -> impl IntoView {
    let auth = use_auth();
    let (assignment, set_assignment) = signal(Option::<Assignment>::None);
    let (submissions, set_submissions) = signal(Vec::<Submission>::new());
    let grading = RwSignal::new(InFlight::default());
    let (loading, set_loading) = signal(true);
    let (not_found, set_not_found) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match load_grading(&api, &assignment_id).await {
            Ok(data) => {
                set_assignment.set(Some(data.assignment));
                set_submissions.set(data.submissions);
            }
            Err(e) => {
                set_not_found.set(e.is_not_found());
                auth.report(&e);
                set_error.set(Some(load_error_message(&e, "Assignment")));
            }
        }
        set_loading.set(false);
    });

    let max_points = Memo::new(move |_| assignment.with(|a| a.as_ref().map(|a| a.max_points).unwrap_or(0)));

    let on_grade = move |submission_id: String, grade_input: String, feedback: String| {
        let grade = match parse_grade(&grade_input, max_points.get_untracked()) {
            Ok(g) => g,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        if !grading.try_update(|g| g.begin(&submission_id)).unwrap_or(false) {
            return;
        }
        set_error.set(None);
        set_notice.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.assignments().grade(&submission_id, grade, &feedback).await {
                Ok(res) => {
                    set_submissions.update(|list| {
                        let graded = match list.iter().find(|s| s.id == res.submission.id) {
                            Some(prev) => res.submission.with_populated_from(prev),
                            None => res.submission,
                        };
                        replace_by_id(list, graded);
                    });
                    set_notice.set(Some("Grade saved".to_string()));
                }
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to save grade"))),
            }
            grading.update(|g| g.finish(&submission_id));
        });
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <Link to=AppRoute::InstructorAssignments class="link link-hover text-sm">"← Back to Assignments"</Link>
            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading submissions..." /> }>
                <Show when=move || !not_found.get() fallback=|| view! { <NotFoundPage what="Assignment" /> }>
                    {move || assignment.get().map(|a| view! {
                        <div>
                            <h1 class="text-3xl font-bold">{a.title.clone()}</h1>
                            <p class="text-base-content/70">
                                "Due " {format_date_time(a.due_date)} " · " {a.max_points} " points"
                            </p>
                        </div>
                    })}
                    <ErrorBanner message=error />
                    <SuccessBanner message=notice />

                    <Show
                        when=move || submissions.with(|s| !s.is_empty())
                        fallback=|| view! { <EmptyState icon="📭" message="No submissions yet" /> }
                    >
                        <div class="space-y-4">
                            <For
                                each=move || submissions.get()
                                key=|s| (s.id.clone(), s.status, s.grade.map(f64::to_bits))
                                children=move |s: Submission| {
                                    let id = StoredValue::new(s.id.clone());
                                    let busy = Memo::new(move |_| grading.with(|g| g.contains(&id.get_value())));
                                    let (grade_input, set_grade_input) =
                                        signal(s.grade.map(format_points).unwrap_or_default());
                                    let (feedback, set_feedback) = signal(s.feedback.clone());
                                    let graded = s.grade.is_some();
                                    view! {
                                        <div class="card bg-base-100 shadow">
                                            <div class="card-body">
                                                <div class="flex justify-between items-start">
                                                    <div>
                                                        <h3 class="font-semibold">{s.student_name().to_string()}</h3>
                                                        <p class="text-xs text-base-content/60">"Submitted " {format_opt(s.submitted_at)}</p>
                                                    </div>
                                                    <span class=if graded { "badge badge-success" } else { "badge badge-warning" }>
                                                        {s.status.label()}
                                                    </span>
                                                </div>
                                                <div class="bg-base-200 rounded p-3 whitespace-pre-wrap text-sm">{s.content.clone()}</div>
                                                <form
                                                    class="grid md:grid-cols-[8rem_1fr_auto] gap-2 items-end"
                                                    on:submit=move |ev: leptos::web_sys::SubmitEvent| {
                                                        ev.prevent_default();
                                                        on_grade(id.get_value(), grade_input.get_untracked(), feedback.get_untracked());
                                                    }
                                                >
                                                    <div class="form-control">
                                                        <label class="label"><span class="label-text">
                                                            {move || format!("Grade (0-{})", max_points.get())}
                                                        </span></label>
                                                        <input type="number" step="0.5" min="0" required class="input input-bordered input-sm"
                                                            prop:value=grade_input
                                                            on:input=move |ev| set_grade_input.set(event_target_value(&ev))
                                                        />
                                                    </div>
                                                    <div class="form-control">
                                                        <label class="label"><span class="label-text">"Feedback"</span></label>
                                                        <input type="text" class="input input-bordered input-sm"
                                                            prop:value=feedback
                                                            on:input=move |ev| set_feedback.set(event_target_value(&ev))
                                                        />
                                                    </div>
                                                    <button type="submit" class="btn btn-primary btn-sm" disabled=move || busy.get()>
                                                        {move || match (busy.get(), graded) {
                                                            (true, _) => "Saving...",
                                                            (false, true) => "Update Grade",
                                                            (false, false) => "Save Grade",
                                                        }}
                                                    </button>
                                                </form>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
