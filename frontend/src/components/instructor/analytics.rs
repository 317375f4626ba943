use crate::auth::use_auth;
use crate::components::common::{ErrorBanner, Loading, NotFoundPage, StatCard};
use crate::loaders::{CourseRoster, load_course_roster, load_error_message};
use crate::stats::{CourseAnalytics, progress_color};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::date::format_opt;

#[component]
pub fn CourseAnalyticsPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let (roster, set_roster) = signal(Option::<CourseRoster>::None);
    let (not_found, set_not_found) = signal(false);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match load_course_roster(&api, &id).await {
            Ok(r) => set_roster.set(Some(r)),
            Err(e) => {
                set_not_found.set(e.is_not_found());
                auth.report(&e);
                set_error.set(Some(load_error_message(&e, "Course analytics")));
            }
        }
        set_loading.set(false);
    });

    let analytics = Memo::new(move |_| {
        roster.with(|r| r.as_ref().map(|r| CourseAnalytics::from_enrollments(&r.enrollments)).unwrap_or_default())
    });

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <Link to=AppRoute::InstructorCourses class="link link-hover text-sm">"← Back to Courses"</Link>
            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading analytics..." /> }>
                <Show when=move || !not_found.get() fallback=|| view! { <NotFoundPage what="Course" /> }>
                    <ErrorBanner message=error />
                    {move || roster.get().map(|r| {
                        let published = r.course.is_published;
                        view! {
                            <div class="flex items-center justify-between">
                                <div>
                                    <h1 class="text-3xl font-bold">{r.course.title.clone()}</h1>
                                    <p class="text-base-content/70">"Course Analytics & Performance"</p>
                                </div>
                                <span class=if published { "badge badge-success" } else { "badge badge-warning" }>
                                    {if published { "Published" } else { "Draft" }}
                                </span>
                            </div>

                            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                                <StatCard title="Total Students" icon="👥" value=Signal::derive(move || analytics.get().total_students.to_string()) />
                                <StatCard title="Completion Rate" icon="🎯" value=Signal::derive(move || format!("{:.1}%", analytics.get().completion_rate)) />
                                <StatCard title="Average Progress" icon="📈" value=Signal::derive(move || format!("{:.1}%", analytics.get().average_progress)) />
                                <StatCard title="Completed" icon="✅" value=Signal::derive(move || analytics.get().completed_students.to_string()) />
                            </div>

                            <div class="grid lg:grid-cols-2 gap-6">
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <h2 class="card-title">"Progress Distribution"</h2>
                                        {move || {
                                            let a = analytics.get();
                                            let total = a.buckets.total().max(1);
                                            a.buckets
                                                .labelled()
                                                .into_iter()
                                                .map(|(label, count)| view! {
                                                    <div>
                                                        <div class="flex justify-between text-sm">
                                                            <span>{label}</span>
                                                            <span>{count} " students"</span>
                                                        </div>
                                                        <progress class="progress progress-primary w-full" value=count max=total></progress>
                                                    </div>
                                                })
                                                .collect_view()
                                        }}
                                    </div>
                                </div>

                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <h2 class="card-title">"Enrolled Students"</h2>
                                        {if r.enrollments.is_empty() {
                                            view! { <p class="text-base-content/50">"No students enrolled yet"</p> }.into_any()
                                        } else {
                                            view! {
                                                <table class="table table-sm">
                                                    <thead><tr><th>"Student"</th><th>"Enrolled"</th><th>"Progress"</th></tr></thead>
                                                    <tbody>
                                                        {r.enrollments.iter().map(|e| view! {
                                                            <tr>
                                                                <td>
                                                                    <div class="font-medium">{e.student_name().to_string()}</div>
                                                                    {e.student_email().map(|m| view! { <div class="text-xs text-base-content/50">{m.to_string()}</div> })}
                                                                </td>
                                                                <td>{format_opt(e.enrolled_at)}</td>
                                                                <td class="w-40">
                                                                    <progress class=format!("progress {}", progress_color(e.progress)) value=e.progress max="100"></progress>
                                                                    <span class="text-xs">{format!(" {:.0}%", e.progress)}</span>
                                                                </td>
                                                            </tr>
                                                        }).collect_view()}
                                                    </tbody>
                                                </table>
                                            }
                                            .into_any()
                                        }}
                                    </div>
                                </div>
                            </div>
                        }
                    })}
                </Show>
            </Show>
        </div>
    }
}
