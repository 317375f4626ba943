//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、路径参数与访问要求。

use ocms_shared::Role;
use std::fmt::Display;

/// 访问要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    SignedIn,
    Role(Role),
}

impl Access {
    /// 传给路由守卫的角色要求；`Public` 不需要守卫
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Access::Role(role) => Some(*role),
            _ => None,
        }
    }
}

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Login,
    Register,
    /// 按角色跳转的面板入口
    Dashboard,
    Courses,
    CourseDetail { id: String },

    // --- 学生 ---
    StudentDashboard,
    StudentCourses,
    StudentAssignments,
    SubmitAssignment { id: String },

    // --- 讲师 ---
    InstructorDashboard,
    InstructorCourses,
    CreateCourse,
    CourseAnalytics { id: String },
    CourseMaterials { course_id: String },
    CreateMaterial { course_id: String },
    InstructorAssignments,
    CreateAssignment { course_id: Option<String> },
    GradeSubmissions { assignment_id: String },
    CreateAnnouncement,

    // --- 通用 ---
    Messages,
    AdminDashboard,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL (path + 可选 query) 解析为路由枚举
    pub fn from_path(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["courses"] => Self::Courses,
            ["courses", id] => Self::CourseDetail { id: id.to_string() },
            ["dashboard"] => Self::Dashboard,
            ["dashboard", rest @ ..] => Self::from_dashboard(rest, query),
            _ => Self::NotFound,
        }
    }

    fn from_dashboard(rest: &[&str], query: &str) -> Self {
        match rest {
            ["student"] => Self::StudentDashboard,
            ["student", "my-courses"] => Self::StudentCourses,
            ["student", "assignments"] => Self::StudentAssignments,
            ["student", "assignments", id, "submit"] => Self::SubmitAssignment { id: id.to_string() },

            ["instructor"] => Self::InstructorDashboard,
            ["instructor", "courses"] => Self::InstructorCourses,
            ["instructor", "courses", "create"] => Self::CreateCourse,
            ["instructor", "courses", id, "analytics"] => Self::CourseAnalytics { id: id.to_string() },
            ["instructor", "course-materials", id, "materials"] => Self::CourseMaterials {
                course_id: id.to_string(),
            },
            ["instructor", "course-materials", id, "materials", "create"] => Self::CreateMaterial {
                course_id: id.to_string(),
            },
            ["instructor", "assignments"] => Self::InstructorAssignments,
            ["instructor", "assignments", "create"] => Self::CreateAssignment {
                course_id: query_param(query, "courseId"),
            },
            ["instructor", "assignments", id, "submissions"] => Self::GradeSubmissions {
                assignment_id: id.to_string(),
            },
            ["instructor", "announcements", "create"] => Self::CreateAnnouncement,

            ["messages"] => Self::Messages,
            ["admin"] => Self::AdminDashboard,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL (含 query)
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Login => "/login".into(),
            Self::Register => "/register".into(),
            Self::Dashboard => "/dashboard".into(),
            Self::Courses => "/courses".into(),
            Self::CourseDetail { id } => format!("/courses/{}", id),
            Self::StudentDashboard => "/dashboard/student".into(),
            Self::StudentCourses => "/dashboard/student/my-courses".into(),
            Self::StudentAssignments => "/dashboard/student/assignments".into(),
            Self::SubmitAssignment { id } => format!("/dashboard/student/assignments/{}/submit", id),
            Self::InstructorDashboard => "/dashboard/instructor".into(),
            Self::InstructorCourses => "/dashboard/instructor/courses".into(),
            Self::CreateCourse => "/dashboard/instructor/courses/create".into(),
            Self::CourseAnalytics { id } => format!("/dashboard/instructor/courses/{}/analytics", id),
            Self::CourseMaterials { course_id } => {
                format!("/dashboard/instructor/course-materials/{}/materials", course_id)
            }
            Self::CreateMaterial { course_id } => format!(
                "/dashboard/instructor/course-materials/{}/materials/create",
                course_id
            ),
            Self::InstructorAssignments => "/dashboard/instructor/assignments".into(),
            Self::CreateAssignment { course_id: None } => {
                "/dashboard/instructor/assignments/create".into()
            }
            Self::CreateAssignment {
                course_id: Some(id),
            } => format!("/dashboard/instructor/assignments/create?courseId={}", id),
            Self::GradeSubmissions { assignment_id } => {
                format!("/dashboard/instructor/assignments/{}/submissions", assignment_id)
            }
            Self::CreateAnnouncement => "/dashboard/instructor/announcements/create".into(),
            Self::Messages => "/dashboard/messages".into(),
            Self::AdminDashboard => "/dashboard/admin".into(),
            Self::NotFound => "/404".into(),
        }
    }

    /// **核心守卫逻辑：定义该路由的访问要求**
    pub fn required_access(&self) -> Access {
        match self {
            Self::Home
            | Self::Login
            | Self::Register
            | Self::Courses
            | Self::CourseDetail { .. }
            | Self::NotFound => Access::Public,

            Self::Dashboard | Self::Messages => Access::SignedIn,

            Self::StudentDashboard
            | Self::StudentCourses
            | Self::StudentAssignments
            | Self::SubmitAssignment { .. } => Access::Role(Role::Student),

            Self::InstructorDashboard
            | Self::InstructorCourses
            | Self::CreateCourse
            | Self::CourseAnalytics { .. }
            | Self::CourseMaterials { .. }
            | Self::CreateMaterial { .. }
            | Self::InstructorAssignments
            | Self::CreateAssignment { .. }
            | Self::GradeSubmissions { .. }
            | Self::CreateAnnouncement => Access::Role(Role::Instructor),

            Self::AdminDashboard => Access::Role(Role::Admin),
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.required_access() != Access::Public
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 角色不足或已登录访问登录页时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 各角色的面板
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentDashboard,
            Role::Instructor => Self::InstructorDashboard,
            Role::Admin => Self::AdminDashboard,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/dashboard/admin"), AppRoute::AdminDashboard);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/dashboard/teacher"), AppRoute::NotFound);
    }

    #[test]
    fn test_parse_params() {
        assert_eq!(
            AppRoute::from_path("/dashboard/instructor/course-materials/c9/materials/create"),
            AppRoute::CreateMaterial { course_id: "c9".into() }
        );
        assert_eq!(
            AppRoute::from_path("/dashboard/instructor/assignments/create?courseId=c1&x=1"),
            AppRoute::CreateAssignment { course_id: Some("c1".into()) }
        );
        assert_eq!(
            AppRoute::from_path("/dashboard/instructor/assignments/create?courseId="),
            AppRoute::CreateAssignment { course_id: None }
        );
        assert_eq!(
            AppRoute::from_path("/dashboard/instructor/assignments/a1/submissions"),
            AppRoute::GradeSubmissions { assignment_id: "a1".into() }
        );
    }

    #[test]
    fn test_every_route_round_trips() {
        let routes = vec![
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::Courses,
            AppRoute::CourseDetail { id: "c1".into() },
            AppRoute::StudentDashboard,
            AppRoute::StudentCourses,
            AppRoute::StudentAssignments,
            AppRoute::SubmitAssignment { id: "a1".into() },
            AppRoute::InstructorDashboard,
            AppRoute::InstructorCourses,
            AppRoute::CreateCourse,
            AppRoute::CourseAnalytics { id: "c1".into() },
            AppRoute::CourseMaterials { course_id: "c1".into() },
            AppRoute::CreateMaterial { course_id: "c1".into() },
            AppRoute::InstructorAssignments,
            AppRoute::CreateAssignment { course_id: None },
            AppRoute::CreateAssignment { course_id: Some("c1".into()) },
            AppRoute::GradeSubmissions { assignment_id: "a1".into() },
            AppRoute::CreateAnnouncement,
            AppRoute::Messages,
            AppRoute::AdminDashboard,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_access_requirements() {
        assert_eq!(AppRoute::Courses.required_access(), Access::Public);
        assert_eq!(AppRoute::Messages.required_access(), Access::SignedIn);
        assert_eq!(
            AppRoute::GradeSubmissions { assignment_id: "a".into() }.required_access(),
            Access::Role(Role::Instructor)
        );
        assert_eq!(
            AppRoute::StudentCourses.required_access().required_role(),
            Some(Role::Student)
        );
        assert!(!AppRoute::CourseDetail { id: "c".into() }.requires_auth());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
    }

    #[test]
    fn test_dashboard_for_role() {
        assert_eq!(AppRoute::dashboard_for(Role::Student).to_path(), "/dashboard/student");
        assert_eq!(AppRoute::dashboard_for(Role::Instructor).to_path(), "/dashboard/instructor");
        assert_eq!(AppRoute::dashboard_for(Role::Admin).to_path(), "/dashboard/admin");
    }
}
