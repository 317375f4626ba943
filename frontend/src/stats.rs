//! 派生统计 (Derived Statistics)
//!
//! 页面上的汇总数字全部由已加载的列表重新计算，不单独请求。

use chrono::{DateTime, Utc};
use ocms_shared::date::is_past_due;
use ocms_shared::{Course, Enrollment, Submission, SubmissionStatus};
use std::collections::{BTreeMap, BTreeSet};

// =========================================================
// 课程分析 (Course Analytics)
// =========================================================

/// 进度分布：0-25 / 26-50 / 51-75 / 76-99 / 100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressBuckets {
    pub quarter: usize,
    pub half: usize,
    pub three_quarters: usize,
    pub almost: usize,
    pub complete: usize,
}

impl ProgressBuckets {
    pub fn from_progress(values: impl IntoIterator<Item = f64>) -> Self {
        let mut b = Self::default();
        for p in values {
            let p = p.clamp(0.0, 100.0);
            if p <= 25.0 {
                b.quarter += 1;
            } else if p <= 50.0 {
                b.half += 1;
            } else if p <= 75.0 {
                b.three_quarters += 1;
            } else if p < 100.0 {
                b.almost += 1;
            } else {
                b.complete += 1;
            }
        }
        b
    }

    /// (标签, 数量)，用于渲染柱状条
    pub fn labelled(&self) -> [(&'static str, usize); 5] {
        [
            ("0-25%", self.quarter),
            ("26-50%", self.half),
            ("51-75%", self.three_quarters),
            ("76-99%", self.almost),
            ("100%", self.complete),
        ]
    }

    pub fn total(&self) -> usize {
        self.quarter + self.half + self.three_quarters + self.almost + self.complete
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CourseAnalytics {
    pub total_students: usize,
    pub completed_students: usize,
    pub average_progress: f64,
    pub completion_rate: f64,
    pub buckets: ProgressBuckets,
}

impl CourseAnalytics {
    pub fn from_enrollments(enrollments: &[Enrollment]) -> Self {
        let total_students = enrollments.len();
        let completed_students = enrollments.iter().filter(|e| e.completed).count();
        Self {
            total_students,
            completed_students,
            average_progress: average(enrollments.iter().map(|e| e.progress)),
            completion_rate: completion_rate(completed_students, total_students),
            buckets: ProgressBuckets::from_progress(enrollments.iter().map(|e| e.progress)),
        }
    }
}

/// 完成率 (百分比)，没有学生时为 0
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

// =========================================================
// 讲师课程汇总
// =========================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseTotals {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    /// 各课程 studentCount 之和，缺失按 0 计
    pub students: u32,
}

impl CourseTotals {
    pub fn from_courses(courses: &[Course]) -> Self {
        let published = courses.iter().filter(|c| c.is_published).count();
        Self {
            total: courses.len(),
            published,
            drafts: courses.len() - published,
            students: courses.iter().map(|c| c.student_count.unwrap_or(0)).sum(),
        }
    }
}

/// 按分类计数，按分类名排序
pub fn category_breakdown(courses: &[Course]) -> Vec<(String, usize)> {
    let mut map: BTreeMap<String, usize> = BTreeMap::new();
    for c in courses {
        let key = if c.category.trim().is_empty() {
            "other".to_string()
        } else {
            c.category.clone()
        };
        *map.entry(key).or_default() += 1;
    }
    map.into_iter().collect()
}

/// 目录中出现的不同讲师数
pub fn instructor_count(courses: &[Course]) -> usize {
    courses
        .iter()
        .filter_map(|c| c.instructor.as_ref().map(|i| i.id()))
        .collect::<BTreeSet<_>>()
        .len()
}

// =========================================================
// 学生面板
// =========================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentStats {
    pub enrolled: usize,
    /// 已提交但尚未评分
    pub awaiting_grade: usize,
    pub completed: usize,
    /// 已评分提交的平均得分率 (百分比，四舍五入)
    pub average_grade: Option<u32>,
}

impl StudentStats {
    pub fn compute(enrollments: &[Enrollment], submissions: &[Submission]) -> Self {
        let graded: Vec<f64> = submissions
            .iter()
            .filter_map(|s| s.grade.map(|g| grade_percent(g, s.max_points)))
            .collect();

        Self {
            enrolled: enrollments.len(),
            awaiting_grade: submissions.iter().filter(|s| s.is_awaiting_grade()).count(),
            completed: enrollments.iter().filter(|e| e.completed).count(),
            average_grade: if graded.is_empty() {
                None
            } else {
                Some(average(graded.into_iter()).round() as u32)
            },
        }
    }
}

/// 得分率；满分未知时按原始分处理
pub fn grade_percent(grade: f64, max_points: u32) -> f64 {
    if max_points == 0 {
        grade
    } else {
        grade / max_points as f64 * 100.0
    }
}

// =========================================================
// 作业状态
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentState {
    Graded,
    Submitted,
    Overdue,
    Open,
}

impl AssignmentState {
    pub fn of(submission: Option<&Submission>, due: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        match submission.map(|s| s.status) {
            Some(SubmissionStatus::Graded) => Self::Graded,
            Some(SubmissionStatus::Submitted) => Self::Submitted,
            _ if is_past_due(due, now) => Self::Overdue,
            _ => Self::Open,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Graded => "badge badge-success",
            Self::Submitted => "badge badge-info",
            Self::Overdue => "badge badge-error",
            Self::Open => "badge badge-warning",
        }
    }

    /// 可以打开提交页
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Open)
    }
}

pub fn status_text(state: AssignmentState, submission: Option<&Submission>) -> String {
    match (state, submission) {
        (AssignmentState::Graded, Some(s)) => format!(
            "Graded: {}/{}",
            format_points(s.grade.unwrap_or(0.0)),
            s.max_points
        ),
        (AssignmentState::Graded, None) => "Graded".into(),
        (AssignmentState::Submitted, _) => "Submitted".into(),
        (AssignmentState::Overdue, _) => "Overdue".into(),
        (AssignmentState::Open, _) => "Not Submitted".into(),
    }
}

/// `9` 而不是 `9.0`，保留必要的小数
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{}", points as i64)
    } else {
        format!("{:.1}", points)
    }
}

// =========================================================
// 展示辅助
// =========================================================

/// `web-development` -> `Web Development`
pub fn format_category(category: &str) -> String {
    let category = if category.trim().is_empty() { "other" } else { category };
    category
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 进度条颜色档位
pub fn progress_color(progress: f64) -> &'static str {
    if progress >= 100.0 {
        "progress-success"
    } else if progress >= 75.0 {
        "progress-info"
    } else if progress >= 50.0 {
        "progress-primary"
    } else if progress >= 25.0 {
        "progress-warning"
    } else {
        "progress-error"
    }
}

pub fn category_badge(category: &str) -> &'static str {
    match category {
        "web-development" => "badge badge-info",
        "data-science" => "badge badge-success",
        "mobile-development" => "badge badge-secondary",
        "programming" => "badge badge-warning",
        "business" => "badge badge-error",
        "design" => "badge badge-accent",
        "marketing" => "badge badge-primary",
        _ => "badge badge-ghost",
    }
}

/// 字节数格式化为 `B / KB / MB / GB`
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        let rounded = (size * 100.0).round() / 100.0;
        format!("{} {}", rounded, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enrollment(id: &str, progress: f64, completed: bool) -> Enrollment {
        serde_json::from_value(json!({
            "_id": id,
            "course": {"_id": "c1", "title": "Rust"},
            "progress": progress,
            "completed": completed
        }))
        .unwrap()
    }

    fn submission(status: &str, grade: Option<f64>, max_points: u32) -> Submission {
        serde_json::from_value(json!({
            "_id": "s", "assignment": "a", "status": status,
            "grade": grade, "maxPoints": max_points
        }))
        .unwrap()
    }

    fn course(published: bool, students: Option<u32>, category: &str) -> Course {
        serde_json::from_value(json!({
            "_id": "c", "title": "T", "isPublished": published,
            "studentCount": students, "category": category
        }))
        .unwrap()
    }

    #[test]
    fn test_progress_buckets_boundaries() {
        let b = ProgressBuckets::from_progress([0.0, 25.0, 26.0, 50.0, 51.0, 75.0, 76.0, 99.0, 100.0]);
        assert_eq!(
            b,
            ProgressBuckets {
                quarter: 2,
                half: 2,
                three_quarters: 2,
                almost: 2,
                complete: 1
            }
        );
        assert_eq!(b.total(), 9);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let b = ProgressBuckets::from_progress([-5.0, 130.0]);
        assert_eq!((b.quarter, b.complete), (1, 1));
    }

    #[test]
    fn test_analytics() {
        let list = vec![
            enrollment("e1", 100.0, true),
            enrollment("e2", 50.0, false),
            enrollment("e3", 0.0, false),
            enrollment("e4", 100.0, true),
        ];
        let a = CourseAnalytics::from_enrollments(&list);
        assert_eq!(a.total_students, 4);
        assert_eq!(a.completed_students, 2);
        assert_eq!(a.completion_rate, 50.0);
        assert_eq!(a.average_progress, 62.5);
    }

    #[test]
    fn test_empty_analytics() {
        let a = CourseAnalytics::from_enrollments(&[]);
        assert_eq!(a.completion_rate, 0.0);
        assert_eq!(a.average_progress, 0.0);
        assert_eq!(completion_rate(0, 0), 0.0);
    }

    #[test]
    fn test_course_totals_missing_student_count() {
        let courses = vec![
            course(true, Some(12), "design"),
            course(false, None, "design"),
            course(true, Some(3), ""),
        ];
        let t = CourseTotals::from_courses(&courses);
        assert_eq!(
            t,
            CourseTotals {
                total: 3,
                published: 2,
                drafts: 1,
                students: 15
            }
        );
        assert_eq!(
            category_breakdown(&courses),
            vec![("design".to_string(), 2), ("other".to_string(), 1)]
        );
    }

    #[test]
    fn test_instructor_count() {
        let courses: Vec<Course> = serde_json::from_value(json!([
            {"_id": "c1", "title": "A", "instructor": {"_id": "u1", "name": "Ferris"}},
            {"_id": "c2", "title": "B", "instructor": "u1"},
            {"_id": "c3", "title": "C", "instructor": "u2"},
            {"_id": "c4", "title": "D"}
        ]))
        .unwrap();
        assert_eq!(instructor_count(&courses), 2);
        assert_eq!(instructor_count(&[]), 0);
    }

    #[test]
    fn test_student_stats() {
        let enrollments = vec![enrollment("e1", 100.0, true), enrollment("e2", 10.0, false)];
        let submissions = vec![
            submission("submitted", None, 10),
            submission("graded", Some(8.0), 10),
            submission("graded", Some(45.0), 50),
            submission("draft", None, 10),
        ];
        let s = StudentStats::compute(&enrollments, &submissions);
        assert_eq!(s.enrolled, 2);
        assert_eq!(s.completed, 1);
        assert_eq!(s.awaiting_grade, 1);
        // (80 + 90) / 2
        assert_eq!(s.average_grade, Some(85));
        assert_eq!(StudentStats::compute(&[], &[]).average_grade, None);
    }

    #[test]
    fn test_assignment_state() {
        let now: DateTime<Utc> = "2026-03-01T00:00:00Z".parse().unwrap();
        let past: DateTime<Utc> = "2026-02-01T00:00:00Z".parse().unwrap();
        let future: DateTime<Utc> = "2026-04-01T00:00:00Z".parse().unwrap();
        let graded = submission("graded", Some(9.0), 10);
        let submitted = submission("submitted", None, 10);

        assert_eq!(AssignmentState::of(Some(&graded), past, now), AssignmentState::Graded);
        assert_eq!(
            status_text(AssignmentState::Graded, Some(&graded)),
            "Graded: 9/10"
        );
        assert_eq!(AssignmentState::of(Some(&submitted), past, now), AssignmentState::Submitted);
        assert_eq!(AssignmentState::of(None, past, now), AssignmentState::Overdue);
        assert!(!AssignmentState::Overdue.can_submit());
        assert_eq!(AssignmentState::of(None, future, now), AssignmentState::Open);
        assert_eq!(status_text(AssignmentState::Open, None), "Not Submitted");
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(format_category("web-development"), "Web Development");
        assert_eq!(format_category(""), "Other");
        assert_eq!(progress_color(100.0), "progress-success");
        assert_eq!(progress_color(75.0), "progress-info");
        assert_eq!(progress_color(50.0), "progress-primary");
        assert_eq!(progress_color(25.0), "progress-warning");
        assert_eq!(progress_color(24.9), "progress-error");
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_points(8.5), "8.5");
    }
}
