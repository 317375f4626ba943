use crate::auth::{register, use_auth};
use crate::components::common::ErrorBanner;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Role;
use ocms_shared::protocol::RegisterRequest;

/// 自助注册只开放学生与讲师
const SELF_SERVICE_ROLES: [Role; 2] = [Role::Student, Role::Instructor];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (role, set_role) = signal(Role::Student);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || email.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }
        if password.get() != confirm.get() {
            set_error_msg.set(Some("Passwords do not match".to_string()));
            return;
        }

        let req = RegisterRequest {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            role: role.get(),
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            if let Err(e) = register(&auth, req).await {
                set_error_msg.set(Some(e.user_message("Registration failed")));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Create your account"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorBanner message=error_msg />

                        <div class="form-control">
                            <label class="label" for="name"><span class="label-text">"Full name"</span></label>
                            <input id="name" type="text" required class="input input-bordered"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email"><span class="label-text">"Email"</span></label>
                            <input id="email" type="email" required class="input input-bordered"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="role"><span class="label-text">"I am a"</span></label>
                            <select id="role" class="select select-bordered"
                                on:change=move |ev| {
                                    if let Ok(r) = event_target_value(&ev).parse::<Role>() {
                                        set_role.set(r);
                                    }
                                }
                            >
                                {SELF_SERVICE_ROLES
                                    .iter()
                                    .map(|r| {
                                        let r = *r;
                                        view! {
                                            <option value=r.as_str() selected=move || role.get() == r>{r.label()}</option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="password"><span class="label-text">"Password"</span></label>
                            <input id="password" type="password" required class="input input-bordered"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm"><span class="label-text">"Confirm password"</span></label>
                            <input id="confirm" type="password" required class="input input-bordered"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Register".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "Already registered? "
                            <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
