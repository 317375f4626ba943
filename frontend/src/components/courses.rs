//! 公开课程目录

use crate::auth::use_auth;
use crate::components::common::{EmptyState, ErrorBanner, Loading};
use crate::loaders::load_catalog;
use crate::state::{InFlight, insert_unique};
use crate::stats::{category_badge, format_category};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::date::format_opt;
use ocms_shared::{Course, Role};

#[component]
pub fn CoursesPage() -> impl IntoView {
    let auth = use_auth();

    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (enrolled, set_enrolled) = signal(Vec::<String>::new());
    let enrolling = RwSignal::new(InFlight::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 会话校验结束后加载，角色变化时重新加载
    Effect::new(move |_| {
        if auth.is_loading_signal().get() {
            return;
        }
        let role = auth.role();
        let api = auth.api();
        spawn_local(async move {
            match load_catalog(&api, role).await {
                Ok(data) => {
                    set_courses.set(data.courses);
                    set_enrolled.set(data.enrolled_ids);
                }
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load courses"))),
            }
            set_loading.set(false);
        });
    });

    let on_enroll = move |course_id: String| {
        if auth.role() != Some(Role::Student) {
            set_error.set(Some("Only students can enroll in courses".to_string()));
            return;
        }
        // 同一课程的请求未完成时忽略重复点击
        if !enrolling.try_update(|f| f.begin(&course_id)).unwrap_or(false) {
            return;
        }
        set_error.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.enrollments().enroll(&course_id).await {
                Ok(_) => set_enrolled.update(|ids| {
                    insert_unique(ids, &course_id);
                }),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to enroll in course"))),
            }
            enrolling.update(|f| f.finish(&course_id));
        });
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <div class="text-center">
                <h1 class="text-4xl font-bold">"Explore Our Courses"</h1>
                <p class="text-base-content/70 mt-2">
                    "Discover a wide range of courses taught by expert instructors."
                </p>
            </div>

            <ErrorBanner message=error />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading courses..." /> }>
                <Show
                    when=move || courses.with(|c| !c.is_empty())
                    fallback=|| view! { <EmptyState icon="📚" message="No courses available. Check back later for new courses." /> }
                >
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || courses.get()
                            key=|c| c.id.clone()
                            children=move |course: Course| {
                                let id = course.id.clone();
                                view! {
                                    <CourseCard
                                        course=course
                                        action=move || enroll_action(auth.role(), id.clone(), enrolled, enrolling, on_enroll)
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

/// 卡片底部按钮，按角色与选课状态变化
fn enroll_action(
    role: Option<Role>,
    course_id: String,
    enrolled: ReadSignal<Vec<String>>,
    enrolling: RwSignal<InFlight>,
    on_enroll: impl Fn(String) + Copy + Send + Sync + 'static,
) -> AnyView {
    match role {
        Some(Role::Student) => {
            if enrolled.with(|ids| ids.contains(&course_id)) {
                view! {
                    <Link to=AppRoute::StudentCourses class="btn btn-success btn-block">"Go to Course"</Link>
                }
                .into_any()
            } else {
                let busy = Memo::new({
                    let id = course_id.clone();
                    move |_| enrolling.with(|f| f.contains(&id))
                });
                view! {
                    <button
                        class="btn btn-primary btn-block"
                        disabled=move || busy.get()
                        on:click=move |_| on_enroll(course_id.clone())
                    >
                        {move || if busy.get() { "Enrolling..." } else { "Enroll Now" }}
                    </button>
                }
                .into_any()
            }
        }
        Some(_) => view! {
            <Link to={AppRoute::CourseDetail { id: course_id }} class="btn btn-outline btn-block">"View Details"</Link>
        }
        .into_any(),
        None => view! {
            <Link to=AppRoute::Login class="btn btn-outline btn-block">"Login to Enroll"</Link>
        }
        .into_any(),
    }
}

#[component]
fn CourseCard(
    course: Course,
    action: impl Fn() -> AnyView + Send + Sync + 'static,
) -> impl IntoView {
    let objectives = course.learning_objectives.clone();
    let extra = objectives.len().saturating_sub(2);
    let detail = AppRoute::CourseDetail { id: course.id.clone() };
    let title = course.title.clone();

    view! {
        <div class="card bg-base-100 shadow-xl">
            {if course.image_url.is_empty() {
                view! { <div class="h-40 bg-primary/10 flex items-center justify-center text-5xl rounded-t-2xl">"📚"</div> }.into_any()
            } else {
                view! { <figure><img src=course.image_url.clone() alt=course.title.clone() class="h-40 w-full object-cover" /></figure> }.into_any()
            }}
            <div class="card-body">
                <span class=category_badge(&course.category)>{format_category(&course.category)}</span>
                <Link to=detail class="card-title link link-hover">{title}</Link>
                <p class="text-sm text-base-content/70 line-clamp-3">{course.description.clone()}</p>
                <div class="flex justify-between text-xs text-base-content/50">
                    <span>"By " {course.instructor_name().to_string()}</span>
                    <span>{format_opt(course.created_at)}</span>
                </div>
                {(!objectives.is_empty()).then(|| view! {
                    <div>
                        <h4 class="font-semibold text-sm">"You'll learn:"</h4>
                        <ul class="text-sm">
                            {objectives.iter().take(2).map(|o| view! { <li>"✓ " {o.clone()}</li> }).collect_view()}
                            {(extra > 0).then(|| view! { <li class="text-base-content/50">"+" {extra} " more objectives"</li> })}
                        </ul>
                    </div>
                })}
                <div class="card-actions mt-2">{action}</div>
            </div>
        </div>
    }
}
