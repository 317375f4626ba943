//! OCMS 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session` / `auth`: 会话状态与认证上下文
//! - `services` / `loaders`: 后端调用与页面数据装配
//! - `components`: UI 组件层

mod api;
mod auth;
mod config;
mod error;
mod forms;
mod guard;
mod loaders;
mod notifications;
mod services;
mod session;
mod state;
mod stats;
mod utils;

mod components {
    pub mod admin;
    pub mod common;
    pub mod course_detail;
    pub mod courses;
    pub mod dashboard;
    pub mod home;
    pub mod instructor;
    pub mod login;
    pub mod messages;
    pub mod navbar;
    mod notification_bell;
    pub mod register;
    pub mod route_guard;
    pub mod student;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod http;
    pub mod route;
    pub mod router;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::admin::AdminDashboardPage;
use crate::components::common::NotFoundPage;
use crate::components::course_detail::CourseDetailPage;
use crate::components::courses::CoursesPage;
use crate::components::dashboard::DashboardRedirect;
use crate::components::home::HomePage;
use crate::components::instructor::{
    CourseAnalyticsPage, CourseMaterialsPage, CreateAnnouncementPage, CreateAssignmentPage,
    CreateCoursePage, CreateMaterialPage, GradeSubmissionsPage, InstructorAssignmentsPage,
    InstructorCoursesPage, InstructorDashboardPage,
};
use crate::components::login::LoginPage;
use crate::components::messages::MessagesPage;
use crate::components::navbar::Navbar;
use crate::components::register::RegisterPage;
use crate::components::route_guard::RouteGuard;
use crate::components::student::{
    MyCoursesPage, StudentAssignmentsPage, StudentDashboardPage, SubmitAssignmentPage,
};
use crate::config::AppConfig;

use leptos::prelude::*;
use ocms_shared::Role;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 包一层 `RouteGuard`
fn guarded(role: Option<Role>, page: impl Fn() -> AnyView + Send + Sync + 'static) -> AnyView {
    view! { <RouteGuard role=role>{page()}</RouteGuard> }.into_any()
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。公开页面直接渲染，
/// 其余页面经过守卫。
fn route_matcher(route: AppRoute) -> AnyView {
    if !route.requires_auth() {
        return match route {
            AppRoute::Login => view! { <LoginPage /> }.into_any(),
            AppRoute::Register => view! { <RegisterPage /> }.into_any(),
            AppRoute::Courses => view! { <CoursesPage /> }.into_any(),
            AppRoute::CourseDetail { id } => view! { <CourseDetailPage id=id /> }.into_any(),
            AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
            _ => view! { <HomePage /> }.into_any(),
        };
    }

    let role = route.required_access().required_role();
    match route {
        AppRoute::Dashboard => guarded(role, || view! { <DashboardRedirect /> }.into_any()),
        AppRoute::Messages => guarded(role, || view! { <MessagesPage /> }.into_any()),

        AppRoute::StudentDashboard => guarded(role, || view! { <StudentDashboardPage /> }.into_any()),
        AppRoute::StudentCourses => guarded(role, || view! { <MyCoursesPage /> }.into_any()),
        AppRoute::StudentAssignments => {
            guarded(role, || view! { <StudentAssignmentsPage /> }.into_any())
        }
        AppRoute::SubmitAssignment { id } => guarded(role, move || {
            view! { <SubmitAssignmentPage id=id.clone() /> }.into_any()
        }),

        AppRoute::InstructorDashboard => {
            guarded(role, || view! { <InstructorDashboardPage /> }.into_any())
        }
        AppRoute::InstructorCourses => guarded(role, || view! { <InstructorCoursesPage /> }.into_any()),
        AppRoute::CreateCourse => guarded(role, || view! { <CreateCoursePage /> }.into_any()),
        AppRoute::CourseAnalytics { id } => guarded(role, move || {
            view! { <CourseAnalyticsPage id=id.clone() /> }.into_any()
        }),
        AppRoute::CourseMaterials { course_id } => guarded(role, move || {
            view! { <CourseMaterialsPage course_id=course_id.clone() /> }.into_any()
        }),
        AppRoute::CreateMaterial { course_id } => guarded(role, move || {
            view! { <CreateMaterialPage course_id=course_id.clone() /> }.into_any()
        }),
        AppRoute::InstructorAssignments => {
            guarded(role, || view! { <InstructorAssignmentsPage /> }.into_any())
        }
        AppRoute::CreateAssignment { course_id } => guarded(role, move || {
            view! { <CreateAssignmentPage course_id=course_id.clone() /> }.into_any()
        }),
        AppRoute::GradeSubmissions { assignment_id } => guarded(role, move || {
            view! { <GradeSubmissionsPage assignment_id=assignment_id.clone() /> }.into_any()
        }),
        AppRoute::CreateAnnouncement => {
            guarded(role, || view! { <CreateAnnouncementPage /> }.into_any())
        }

        AppRoute::AdminDashboard => guarded(role, || view! { <AdminDashboardPage /> }.into_any()),

        // 公开路由已在上方处理
        _ => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取编译期配置并共享
    let config = AppConfig::from_env();
    provide_context(config.clone());

    // 2. 创建认证上下文
    let auth_ctx = AuthContext::new(&config);
    provide_context(auth_ctx);

    // 3. 从 LocalStorage 恢复会话
    init_auth(&auth_ctx);

    // 4. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen bg-base-200">
                <Navbar />
                <main>
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </Router>
    }
}
