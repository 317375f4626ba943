use crate::auth::use_auth;
use crate::components::common::{EmptyState, ErrorBanner, Loading};
use crate::config::use_config;
use crate::loaders::{AssignmentRow, StudentAssignments, load_student_assignments};
use crate::stats::{AssignmentState, status_text};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::date::{self, format_date_time};

#[component]
pub fn StudentAssignmentsPage() -> impl IntoView {
    let auth = use_auth();
    let limit = use_config().fan_out_limit;
    let (data, set_data) = signal(StudentAssignments::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match load_student_assignments(&api, limit).await {
            Ok(d) => set_data.set(d),
            Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load assignments"))),
        }
        set_loading.set(false);
    });

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"My Assignments"</h1>
                <p class="text-base-content/70">"Assignments from all your enrolled courses"</p>
            </div>
            <ErrorBanner message=error />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading assignments..." /> }>
                <Show
                    when=move || data.with(|d| !d.rows.is_empty())
                    fallback=move || {
                        let no_courses = data.with(|d| d.enrolled_courses == 0);
                        if no_courses {
                            view! {
                                <EmptyState icon="📝" message="You need to enroll in courses to see assignments">
                                    <Link to=AppRoute::Courses class="btn btn-primary">"Browse Courses"</Link>
                                </EmptyState>
                            }
                            .into_any()
                        } else {
                            view! { <EmptyState icon="📝" message="No published assignments in your enrolled courses" /> }.into_any()
                        }
                    }
                >
                    <div class="space-y-4">
                        {move || data.get().rows.into_iter().map(assignment_card).collect_view()}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

fn assignment_card(row: AssignmentRow) -> impl IntoView {
    let AssignmentRow { assignment, submission } = row;
    let state = AssignmentState::of(submission.as_ref(), assignment.due_date, date::now());
    let text = status_text(state, submission.as_ref());
    let feedback = submission.as_ref().map(|s| s.feedback.clone()).filter(|f| !f.is_empty());
    let course = assignment.course_title().unwrap_or("Course").to_string();

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-start gap-3">
                    <span class="text-3xl">{assignment.assignment_type.icon()}</span>
                    <div class="flex-1 space-y-1">
                        <div class="flex items-center gap-2">
                            <h3 class="font-bold text-lg">{assignment.title.clone()}</h3>
                            <span class=state.badge_class()>{text}</span>
                        </div>
                        <p class="text-sm text-base-content/70">{assignment.description.clone()}</p>
                        <p class="text-xs text-base-content/50">
                            "Course: " {course} " · Due: " {format_date_time(assignment.due_date)} " · Points: " {assignment.max_points}
                        </p>
                        {feedback.map(|f| view! {
                            <div class="alert alert-info text-sm py-2"><span>"Feedback: " {f}</span></div>
                        })}
                    </div>
                    <div>
                        {if state.can_submit() {
                            view! {
                                <Link to={AppRoute::SubmitAssignment { id: assignment.id.clone() }} class="btn btn-primary btn-sm">"Submit"</Link>
                            }
                            .into_any()
                        } else if state == AssignmentState::Overdue {
                            view! { <button class="btn btn-sm" disabled=true>"Closed"</button> }.into_any()
                        } else {
                            ().into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
