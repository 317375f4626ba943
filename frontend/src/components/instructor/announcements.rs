use crate::auth::use_auth;
use crate::components::common::{ErrorBanner, Loading};
use crate::forms::announcement_draft;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Course;

#[component]
pub fn CreateAnnouncementPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (course_id, set_course_id) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (sending, set_sending) = signal(false);
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
        if sending.get_untracked() {
            return;
        }
        let draft = match announcement_draft(&course_id.get_untracked(), &content.get_untracked()) {
            Ok(d) => d,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_sending.set(true);
        set_error.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.communication().send_announcement(draft).await {
                Ok(_) => router.push(AppRoute::InstructorCourses),
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to send announcement"))),
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-6">
            <Link to=AppRoute::InstructorDashboard class="link link-hover text-sm">"← Back to Dashboard"</Link>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="card bg-base-100 shadow">
                    <form class="card-body space-y-4" on:submit=on_submit>
                        <h1 class="text-2xl font-bold">"📢 New Announcement"</h1>
                        <p class="text-base-content/70">"Every student enrolled in the course will be notified."</p>
                        <ErrorBanner message=error />

                        <div class="form-control">
                            <label class="label" for="course"><span class="label-text">"Course *"</span></label>
                            <select id="course" required class="select select-bordered"
                                on:change=move |ev| set_course_id.set(event_target_value(&ev))
                            >
                                <option value="">"Select a course"</option>
                                {move || courses
                                    .get()
                                    .into_iter()
                                    .map(|c| view! { <option value=c.id>{c.title}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="content"><span class="label-text">"Announcement *"</span></label>
                            <textarea id="content" rows="6" required class="textarea textarea-bordered"
                                prop:value=content
                                on:input=move |ev| set_content.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                                {move || if sending.get() { "Sending..." } else { "Send Announcement" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
