//! 页面数据加载
//!
//! 每个页面挂载时的取数逻辑集中在这里，与视图分离以便在原生测试中
//! 通过 `MockTransport` 验证。相互独立的请求用 `join`/`try_join` 并发，
//! 依赖前一步结果的逐项请求用 [`fan_out`] 限流并发。

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::utils::fan_out;
use crate::web::http::Transport;
use futures::{join, try_join};
use leptos::logging::warn;
use ocms_shared::{
    Assignment, Course, Enrollment, InstructorStats, LearningMaterial, MaterialOrder, Message,
    Role, Submission,
};

// =========================================================
// 公共页面
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogData {
    pub courses: Vec<Course>,
    /// 仅学生会加载
    pub enrolled_ids: Vec<String>,
}

/// 课程目录；学生额外加载已选课程 id，失败时只记录日志
pub async fn load_catalog<T: Transport>(
    api: &ApiClient<T>,
    role: Option<Role>,
) -> ApiResult<CatalogData> {
    if role != Some(Role::Student) {
        let courses = api.courses().list().await?;
        return Ok(CatalogData {
            courses,
            enrolled_ids: Vec::new(),
        });
    }

    let (courses, enrollments) = (api.courses(), api.enrollments());
    let (courses, enrollments) = join!(courses.list(), enrollments.mine());
    let enrolled_ids = match enrollments {
        Ok(list) => list.iter().map(|e| e.course_id().to_string()).collect(),
        Err(e) => {
            warn!("[Courses] Failed to load enrollments: {}", e);
            Vec::new()
        }
    };
    Ok(CatalogData {
        courses: courses?,
        enrolled_ids,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetailData {
    pub course: Course,
    pub announcements: Vec<Message>,
    pub materials: Vec<LearningMaterial>,
    pub enrolled: bool,
}

/// 课程详情
///
/// 公告与资料只对已登录用户加载，失败时降级为空列表；
/// 课程本身的错误 (包括 404) 原样返回。
pub async fn load_course_detail<T: Transport>(
    api: &ApiClient<T>,
    course_id: &str,
    role: Option<Role>,
) -> ApiResult<CourseDetailData> {
    if role.is_none() {
        let course = api.courses().get(course_id).await?;
        return Ok(CourseDetailData {
            course,
            announcements: Vec::new(),
            materials: Vec::new(),
            enrolled: false,
        });
    }

    let courses = api.courses();
    let comm = api.communication();
    let materials = api.materials();
    let enrolled = async {
        if role == Some(Role::Student) {
            api.enrollments()
                .mine()
                .await
                .map(|list| list.iter().any(|e| e.course_id() == course_id))
        } else {
            Ok(false)
        }
    };
    let (course, announcements, materials, enrolled) = join!(
        courses.get(course_id),
        comm.course_announcements(course_id),
        materials.for_course(course_id),
        enrolled
    );

    Ok(CourseDetailData {
        course: course?,
        announcements: degrade("announcements", announcements),
        materials: sorted_materials(degrade("materials", materials)),
        enrolled: enrolled.unwrap_or(false),
    })
}

fn degrade<V>(what: &str, result: ApiResult<Vec<V>>) -> Vec<V> {
    result.unwrap_or_else(|e| {
        warn!("[CourseDetail] Failed to load {}: {}", what, e);
        Vec::new()
    })
}

// =========================================================
// 学生
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentOverview {
    pub enrollments: Vec<Enrollment>,
    pub submissions: Vec<Submission>,
}

pub async fn load_student_overview<T: Transport>(
    api: &ApiClient<T>,
) -> ApiResult<StudentOverview> {
    let (enrollments, assignments) = (api.enrollments(), api.assignments());
    let (enrollments, submissions) =
        try_join!(enrollments.mine(), assignments.my_submissions())?;
    Ok(StudentOverview {
        enrollments,
        submissions,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRow {
    pub assignment: Assignment,
    pub submission: Option<Submission>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentAssignments {
    pub rows: Vec<AssignmentRow>,
    pub enrolled_courses: usize,
}

/// 学生作业列表
///
/// 先并发取选课与提交记录，再按课程 fan-out 取作业；单门课失败只记日志。
/// 只保留已发布的作业，并按 id 关联自己的提交。
pub async fn load_student_assignments<T: Transport>(
    api: &ApiClient<T>,
    limit: usize,
) -> ApiResult<StudentAssignments> {
    let overview = load_student_overview(api).await?;
    let course_ids: Vec<String> = overview
        .enrollments
        .iter()
        .map(|e| e.course_id().to_string())
        .collect();

    let assignments = assignments_for_courses(api, &course_ids, limit).await;
    let rows = assignments
        .into_iter()
        .filter(|a| a.is_published)
        .map(|assignment| {
            let submission = overview
                .submissions
                .iter()
                .find(|s| s.assignment_id() == assignment.id)
                .cloned();
            AssignmentRow {
                assignment,
                submission,
            }
        })
        .collect();

    Ok(StudentAssignments {
        rows,
        enrolled_courses: course_ids.len(),
    })
}

async fn assignments_for_courses<T: Transport>(
    api: &ApiClient<T>,
    course_ids: &[String],
    limit: usize,
) -> Vec<Assignment> {
    let results = fan_out(course_ids, limit, |id| async move {
        (id, api.assignments().for_course(id).await)
    })
    .await;

    results
        .into_iter()
        .flat_map(|(id, result)| match result {
            Ok(list) => list,
            Err(e) => {
                warn!("[Assignments] Failed to load assignments for course {}: {}", id, e);
                Vec::new()
            }
        })
        .collect()
}

// =========================================================
// 讲师
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct InstructorOverview {
    pub stats: InstructorStats,
    pub recent: Vec<Submission>,
}

pub async fn load_instructor_overview<T: Transport>(
    api: &ApiClient<T>,
) -> ApiResult<InstructorOverview> {
    let instructor = api.instructor();
    let (stats, recent) = try_join!(instructor.dashboard_stats(), instructor.recent_submissions())?;
    Ok(InstructorOverview { stats, recent })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRoster {
    pub course: Course,
    pub enrollments: Vec<Enrollment>,
}

pub async fn load_course_roster<T: Transport>(
    api: &ApiClient<T>,
    course_id: &str,
) -> ApiResult<CourseRoster> {
    let (courses, enrollments) = (api.courses(), api.enrollments());
    let (course, enrollments) = try_join!(
        courses.get(course_id),
        enrollments.course_students(course_id)
    )?;
    Ok(CourseRoster {
        course,
        enrollments,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseMaterialsData {
    pub course: Course,
    pub materials: Vec<LearningMaterial>,
}

pub async fn load_course_materials<T: Transport>(
    api: &ApiClient<T>,
    course_id: &str,
) -> ApiResult<CourseMaterialsData> {
    let (courses, materials) = (api.courses(), api.materials());
    let (course, materials) =
        try_join!(courses.get(course_id), materials.for_course(course_id))?;
    Ok(CourseMaterialsData {
        course,
        materials: sorted_materials(materials),
    })
}

fn sorted_materials(mut materials: Vec<LearningMaterial>) -> Vec<LearningMaterial> {
    materials.sort_by_key(|m| m.order);
    materials
}

/// 按当前列表位置重新编号
pub fn reorder_payload(materials: &[LearningMaterial]) -> Vec<MaterialOrder> {
    materials
        .iter()
        .enumerate()
        .map(|(i, m)| MaterialOrder {
            id: m.id.clone(),
            order: i as i32,
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructorAssignments {
    pub courses: Vec<Course>,
    pub assignments: Vec<Assignment>,
}

pub async fn load_instructor_assignments<T: Transport>(
    api: &ApiClient<T>,
    limit: usize,
) -> ApiResult<InstructorAssignments> {
    let courses = api.courses().mine().await?;
    let ids: Vec<String> = courses.iter().map(|c| c.id.clone()).collect();
    let assignments = assignments_for_courses(api, &ids, limit).await;
    Ok(InstructorAssignments {
        courses,
        assignments,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradingData {
    pub assignment: Assignment,
    pub submissions: Vec<Submission>,
}

pub async fn load_grading<T: Transport>(
    api: &ApiClient<T>,
    assignment_id: &str,
) -> ApiResult<GradingData> {
    let assignments = api.assignments();
    let (assignment, submissions) = try_join!(
        assignments.get(assignment_id),
        assignments.submissions(assignment_id)
    )?;
    Ok(GradingData {
        assignment,
        submissions,
    })
}

/// 详情页的统一错误文案：404 与其他失败区分
pub fn load_error_message(err: &ApiError, what: &str) -> String {
    if err.is_not_found() {
        format!("{} not found", what)
    } else {
        err.user_message(&format!("Failed to load {}", what.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::MockTransport;
    use ocms_shared::protocol::HttpMethod;
    use serde_json::{Value, json};

    const BASE: &str = "http://api.test/api";

    fn client() -> (ApiClient<MockTransport>, MockTransport) {
        let mock = MockTransport::new(BASE);
        let api = ApiClient::new(BASE, mock.clone()).with_token(Some("t".into()));
        (api, mock)
    }

    fn course(id: &str, title: &str) -> Value {
        json!({"_id": id, "title": title, "isPublished": true})
    }

    fn enrollment(id: &str, course_id: &str) -> Value {
        json!({"_id": id, "course": course(course_id, "C"), "progress": 10})
    }

    fn assignment(id: &str, course_id: &str, published: bool) -> Value {
        json!({
            "_id": id,
            "title": format!("A {}", id),
            "course": {"_id": course_id, "title": "C"},
            "dueDate": "2030-01-01T00:00:00Z",
            "maxPoints": 100,
            "isPublished": published
        })
    }

    fn material(id: &str, order: i32) -> Value {
        json!({"_id": id, "title": id, "course": "c1", "materialType": "document", "order": order})
    }

    #[tokio::test]
    async fn test_catalog_for_student_loads_enrolled_ids() {
        let (api, mock) = client();
        mock.mock_response(HttpMethod::Get, "/courses", 200, json!([course("c1", "Rust"), course("c2", "Go")]));
        mock.mock_response(HttpMethod::Get, "/enrollments/my-courses", 200, json!([enrollment("e1", "c2")]));

        let data = load_catalog(&api, Some(Role::Student)).await.unwrap();
        assert_eq!(data.courses.len(), 2);
        assert_eq!(data.enrolled_ids, vec!["c2"]);
    }

    #[tokio::test]
    async fn test_catalog_tolerates_enrollment_failure() {
        let (api, mock) = client();
        mock.mock_response(HttpMethod::Get, "/courses", 200, json!([course("c1", "Rust")]));
        mock.mock_response(HttpMethod::Get, "/enrollments/my-courses", 500, json!({"message": "boom"}));

        let data = load_catalog(&api, Some(Role::Student)).await.unwrap();
        assert_eq!(data.courses.len(), 1);
        assert!(data.enrolled_ids.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_for_anonymous_skips_enrollments() {
        let (api, mock) = client();
        mock.mock_response(HttpMethod::Get, "/courses", 200, json!([]));
        load_catalog(&api, None).await.unwrap();
        assert_eq!(mock.paths(), vec![(HttpMethod::Get, "/courses".to_string())]);
    }

    #[tokio::test]
    async fn test_course_detail_degrades_side_lists() {
        let (api, mock) = client();
        mock.mock_response(HttpMethod::Get, "/courses/c1", 200, course("c1", "Rust"));
        mock.mock_response(HttpMethod::Get, "/enrollments/my-courses", 200, json!([enrollment("e1", "c1")]));
        // 公告与资料未注册 -> 404，降级为空

        let data = load_course_detail(&api, "c1", Some(Role::Student)).await.unwrap();
        assert_eq!(data.course.title, "Rust");
        assert!(data.announcements.is_empty());
        assert!(data.materials.is_empty());
        assert!(data.enrolled);
    }

    #[tokio::test]
    async fn test_course_detail_not_found() {
        let (api, _mock) = client();
        let err = load_course_detail(&api, "missing", None).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(load_error_message(&err, "Course"), "Course not found");
    }

    #[tokio::test]
    async fn test_student_assignments_fan_out() {
        let (api, mock) = client();
        mock.mock_response(
            HttpMethod::Get,
            "/enrollments/my-courses",
            200,
            json!([enrollment("e1", "c1"), enrollment("e2", "c2"), enrollment("e3", "c3")]),
        );
        mock.mock_response(
            HttpMethod::Get,
            "/assignments/student/my-submissions",
            200,
            json!([{"_id": "s1", "assignment": "a1", "status": "submitted"}]),
        );
        mock.mock_response(
            HttpMethod::Get,
            "/assignments/course/c1",
            200,
            json!([assignment("a1", "c1", true), assignment("a2", "c1", false)]),
        );
        mock.mock_response(HttpMethod::Get, "/assignments/course/c2", 500, json!({"message": "down"}));
        mock.mock_response(HttpMethod::Get, "/assignments/course/c3", 200, json!([assignment("a3", "c3", true)]));

        let data = load_student_assignments(&api, 2).await.unwrap();
        assert_eq!(data.enrolled_courses, 3);
        let ids: Vec<&str> = data.rows.iter().map(|r| r.assignment.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a3"]);
        assert_eq!(
            data.rows[0].submission.as_ref().map(|s| s.id.as_str()),
            Some("s1")
        );
        assert!(data.rows[1].submission.is_none());
    }

    #[tokio::test]
    async fn test_student_overview_fails_as_a_whole() {
        let (api, mock) = client();
        mock.mock_response(HttpMethod::Get, "/enrollments/my-courses", 200, json!([]));
        mock.mock_response(
            HttpMethod::Get,
            "/assignments/student/my-submissions",
            500,
            json!({"message": "Server error"}),
        );
        let err = load_student_overview(&api).await.unwrap_err();
        assert_eq!(err.user_message("Failed"), "Server error");
    }

    #[tokio::test]
    async fn test_instructor_assignments_over_my_courses() {
        let (api, mock) = client();
        mock.mock_response(
            HttpMethod::Get,
            "/courses/instructor/my-courses",
            200,
            json!([course("c1", "Rust"), course("c2", "Go")]),
        );
        mock.mock_response(HttpMethod::Get, "/assignments/course/c1", 200, json!([assignment("a1", "c1", false)]));
        mock.mock_response(HttpMethod::Get, "/assignments/course/c2", 200, json!([assignment("a2", "c2", true)]));

        let data = load_instructor_assignments(&api, 4).await.unwrap();
        assert_eq!(data.courses.len(), 2);
        // 讲师能看到未发布的作业
        assert_eq!(data.assignments.len(), 2);
        assert_eq!(data.assignments[0].id, "a1");
    }

    #[tokio::test]
    async fn test_course_materials_sorted_and_reordered() {
        let (api, mock) = client();
        mock.mock_response(HttpMethod::Get, "/courses/c1", 200, course("c1", "Rust"));
        mock.mock_response(
            HttpMethod::Get,
            "/learning-materials/course/c1",
            200,
            json!([material("m2", 5), material("m1", 1)]),
        );
        let data = load_course_materials(&api, "c1").await.unwrap();
        assert_eq!(data.materials[0].id, "m1");

        let payload = reorder_payload(&data.materials);
        assert_eq!(
            payload,
            vec![
                MaterialOrder { id: "m1".into(), order: 0 },
                MaterialOrder { id: "m2".into(), order: 1 },
            ]
        );
    }

    #[tokio::test]
    async fn test_grading_and_roster_join() {
        let (api, mock) = client();
        mock.mock_response(HttpMethod::Get, "/assignments/a1", 200, assignment("a1", "c1", true));
        mock.mock_response(HttpMethod::Get, "/assignments/a1/submissions", 200, json!([]));
        let data = load_grading(&api, "a1").await.unwrap();
        assert_eq!(data.assignment.max_points, 100);
        assert!(data.submissions.is_empty());

        mock.mock_response(HttpMethod::Get, "/courses/c1", 200, course("c1", "Rust"));
        mock.mock_response(
            HttpMethod::Get,
            "/enrollments/courses/c1/students",
            200,
            json!([enrollment("e1", "c1")]),
        );
        let roster = load_course_roster(&api, "c1").await.unwrap();
        assert_eq!(roster.enrollments.len(), 1);
    }

    #[tokio::test]
    async fn test_instructor_overview() {
        let (api, mock) = client();
        mock.mock_response(
            HttpMethod::Get,
            "/instructor/dashboard/stats",
            200,
            json!({"totalCourses": 2, "totalStudents": 10, "assignmentsToGrade": 1, "averageRating": "4.5"}),
        );
        mock.mock_response(HttpMethod::Get, "/instructor/dashboard/recent-submissions", 200, json!([]));
        let data = load_instructor_overview(&api).await.unwrap();
        assert_eq!(data.stats.total_students, 10);
    }
}
