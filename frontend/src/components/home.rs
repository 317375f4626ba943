use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "📚",
        "Course Management",
        "Create, organize, and manage courses with dynamic content and modules.",
    ),
    (
        "👥",
        "Student Enrollment",
        "Streamline student registration and course enrollment processes.",
    ),
    (
        "📊",
        "Assessment",
        "Publish assignments, collect submissions and grade them in one place.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content text-center flex-col max-w-4xl">
                <h1 class="text-5xl font-bold">
                    "Online Course Management" <span class="text-primary">" System"</span>
                </h1>
                <p class="py-6 text-base-content/70">
                    "Centralize course creation, enrollment, delivery, and assessment in one place."
                </p>
                <div class="flex gap-4 justify-center">
                    <Link to=AppRoute::Register class="btn btn-primary">"Get Started"</Link>
                    <Link to=AppRoute::Login class="btn btn-outline">"Sign In"</Link>
                    <Link to=AppRoute::Courses class="btn btn-ghost">"Browse Courses"</Link>
                </div>
                <div class="grid md:grid-cols-3 gap-6 mt-12">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, text)| view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body items-center">
                                    <div class="text-4xl">{*icon}</div>
                                    <h3 class="card-title">{*title}</h3>
                                    <p class="text-sm text-base-content/70">{*text}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
