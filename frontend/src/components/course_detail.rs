//! 课程详情
//!
//! 课程本身加载失败时显示错误 (404 单独处理)；公告与资料失败时显示为空。

use crate::auth::use_auth;
use crate::components::common::{ErrorBanner, Loading, NotFoundPage, SuccessBanner};
use crate::loaders::{CourseDetailData, load_course_detail, load_error_message};
use crate::stats::{category_badge, format_category, format_file_size};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::date::{format_date, format_opt};
use ocms_shared::{LearningMaterial, Message, Role};

#[component]
pub fn CourseDetailPage(id: String) -> impl IntoView {
    let auth = use_auth();

    let (data, set_data) = signal(Option::<CourseDetailData>::None);
    let (not_found, set_not_found) = signal(false);
    let (loading, set_loading) = signal(true);
    let (enrolling, set_enrolling) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let course_id = StoredValue::new(id);

    Effect::new(move |_| {
        if auth.is_loading_signal().get() {
            return;
        }
        let role = auth.role();
        let api = auth.api();
        let id = course_id.get_value();
        spawn_local(async move {
            match load_course_detail(&api, &id, role).await {
                Ok(d) => set_data.set(Some(d)),
                Err(e) => {
                    set_not_found.set(e.is_not_found());
                    auth.report(&e);
                    set_error.set(Some(load_error_message(&e, "Course")));
                }
            }
            set_loading.set(false);
        });
    });

    let on_enroll = move |_| {
        if enrolling.get_untracked() {
            return;
        }
        set_enrolling.set(true);
        set_error.set(None);
        let api = auth.api();
        let id = course_id.get_value();
        spawn_local(async move {
            match api.enrollments().enroll(&id).await {
                Ok(res) => {
                    set_data.update(|d| {
                        if let Some(d) = d {
                            d.enrolled = true;
                        }
                    });
                    let msg = if res.message.is_empty() { "Enrolled successfully".to_string() } else { res.message };
                    set_notice.set(Some(msg));
                }
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to enroll in course"))),
            }
            set_enrolling.set(false);
        });
    };

    let is_student = move || auth.role() == Some(Role::Student);
    let signed_in = move || auth.role().is_some();

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <Link to=AppRoute::Courses class="link link-hover text-sm">"← Back to Courses"</Link>
            <SuccessBanner message=notice />
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show when=move || !not_found.get() fallback=|| view! { <NotFoundPage what="Course" /> }>
                    <ErrorBanner message=error />
                    {move || data.get().map(|d| {
                        let course = d.course.clone();
                        let enrolled = d.enrolled;
                        let lists = [
                            ("What you'll learn", course.learning_objectives.clone()),
                            ("Requirements", course.requirements.clone()),
                            ("Who this course is for", course.target_audience.clone()),
                        ];
                        view! {
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body space-y-3">
                                    <div class="flex gap-2 items-center">
                                        <span class=category_badge(&course.category)>{format_category(&course.category)}</span>
                                        <span class="badge badge-outline">
                                            {if course.price == 0.0 { "Free".to_string() } else { format!("${:.2}", course.price) }}
                                        </span>
                                    </div>
                                    <h1 class="text-3xl font-bold">{course.title.clone()}</h1>
                                    <p class="text-base-content/70">{course.description.clone()}</p>
                                    <p class="text-sm text-base-content/50">
                                        "By " {course.instructor_name().to_string()} " · Created " {format_opt(course.created_at)}
                                    </p>
                                    <div class="card-actions">
                                        {if !is_student() {
                                            None
                                        } else if enrolled {
                                            Some(view! { <Link to=AppRoute::StudentCourses class="btn btn-success">"Go to My Courses"</Link> }.into_any())
                                        } else {
                                            Some(view! {
                                                <button class="btn btn-primary" disabled=move || enrolling.get() on:click=on_enroll>
                                                    {move || if enrolling.get() { "Enrolling..." } else { "Enroll Now" }}
                                                </button>
                                            }.into_any())
                                        }}
                                    </div>
                                </div>
                            </div>

                            <div class="grid md:grid-cols-3 gap-4">
                                {lists
                                    .into_iter()
                                    .filter(|(_, items)| !items.is_empty())
                                    .map(|(title, items)| view! {
                                        <div class="card bg-base-100 shadow">
                                            <div class="card-body">
                                                <h3 class="card-title text-base">{title}</h3>
                                                <ul class="text-sm list-disc list-inside">
                                                    {items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
                                                </ul>
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>

                            <Show when=signed_in>
                                <AnnouncementList items=d.announcements.clone() />
                                <MaterialList items=d.materials.clone() />
                            </Show>
                        }
                    })}
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn AnnouncementList(items: Vec<Message>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"📢 Announcements"</h2>
                {if items.is_empty() {
                    view! { <p class="text-base-content/50">"No announcements yet"</p> }.into_any()
                } else {
                    items
                        .into_iter()
                        .map(|m| view! {
                            <div class="border-l-4 border-primary pl-3 py-1">
                                <p>{m.content.clone()}</p>
                                <p class="text-xs text-base-content/50">
                                    {m.sender_name().to_string()} " · " {m.created_at.map(format_date).unwrap_or_default()}
                                </p>
                            </div>
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn MaterialList(items: Vec<LearningMaterial>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"📂 Learning Materials"</h2>
                {if items.is_empty() {
                    view! { <p class="text-base-content/50">"No materials available"</p> }.into_any()
                } else {
                    view! {
                        <ul class="divide-y divide-base-200">
                            {items
                                .into_iter()
                                .map(|m| {
                                    let href = m.href().map(str::to_string);
                                    view! {
                                        <li class="py-2 flex items-center gap-3">
                                            <span class="text-xl">{m.material_type.icon()}</span>
                                            <div class="flex-1">
                                                <p class="font-medium">{m.title.clone()}</p>
                                                <p class="text-xs text-base-content/50">
                                                    {m.material_type.label()}
                                                    {m.duration.map(|d| format!(" · {} min", d))}
                                                    {m.file_size.map(|s| format!(" · {}", format_file_size(s)))}
                                                </p>
                                            </div>
                                            {href.map(|h| view! {
                                                <a href=h target="_blank" rel="noopener" class="btn btn-ghost btn-xs">"Open"</a>
                                            })}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
