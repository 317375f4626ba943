//! 表单模型
//!
//! 每个表单都是普通结构体：字段保存输入框原文，`to_draft` 负责校验并
//! 转换为请求体。组件通过 `RwSignal<XxxForm>` 持有它们。

use chrono::{DateTime, Local, TimeZone, Utc};
use ocms_shared::date;
use ocms_shared::{
    AccessType, AssignmentDraft, AssignmentType, CourseDraft, MaterialDraft, MaterialType,
    MessageDraft, SubmissionDraft,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
    #[error("Invalid due date")]
    InvalidDate,
    #[error("The due date for this assignment has passed")]
    PastDue,
}

/// 去掉首尾空白并丢弃空项
pub fn clean_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

/// 向标签列表追加一个标签；空白或重复时不变
pub fn add_tag(tags: &mut Vec<String>, input: &str) -> bool {
    let tag = input.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let v = value.trim();
    if v.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(v.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// 解析评分：必须落在 `0..=max_points`
pub fn parse_grade(input: &str, max_points: u32) -> Result<f64, FormError> {
    let grade: f64 = input
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber("Grade"))?;
    if !grade.is_finite() || grade < 0.0 || grade > f64::from(max_points) {
        return Err(FormError::OutOfRange {
            field: "Grade",
            min: 0,
            max: max_points,
        });
    }
    Ok(grade)
}

pub fn parse_progress(input: &str) -> Result<f64, FormError> {
    let progress: f64 = input
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber("Progress"))?;
    if !(0.0..=100.0).contains(&progress) {
        return Err(FormError::OutOfRange {
            field: "Progress",
            min: 0,
            max: 100,
        });
    }
    Ok(progress)
}

// ==========================================
// 课程
// ==========================================

/// 课程分类 (院系)：(值, 展示名)
pub const CATEGORIES: [(&str, &str); 11] = [
    ("computer-science", "Computer Science"),
    ("mathematics", "Mathematics"),
    ("physics", "Physics"),
    ("chemistry", "Chemistry"),
    ("biology", "Biology"),
    ("engineering", "Engineering"),
    ("business", "Business"),
    ("arts", "Arts"),
    ("humanities", "Humanities"),
    ("social-sciences", "Social Sciences"),
    ("other", "Other"),
];

/// 课程级别 (取值, 显示名)
pub const LEVELS: [(&str, &str); 4] = [
    ("beginner", "100L"),
    ("intermediate", "200L"),
    ("advanced", "300L"),
    ("all-levels", "400L+"),
];

pub fn level_label(value: &str) -> Option<&'static str> {
    LEVELS.iter().find(|(v, _)| *v == value).map(|(_, label)| *label)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseForm {
    pub title: String,
    pub course_code: String,
    pub level: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
    pub learning_objectives: Vec<String>,
    pub requirements: Vec<String>,
    pub target_audience: Vec<String>,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            course_code: String::new(),
            level: String::new(),
            description: String::new(),
            category: String::new(),
            price: "0".to_string(),
            image_url: String::new(),
            learning_objectives: vec![String::new()],
            requirements: vec![String::new()],
            target_audience: vec![String::new()],
        }
    }
}

impl CourseForm {
    pub fn to_draft(&self) -> Result<CourseDraft, FormError> {
        let title = required(&self.title, "Title")?;
        let course_code = required(&self.course_code, "Course code")?.to_uppercase();
        let level = required(&self.level, "Course level")?;
        if !LEVELS.iter().any(|(value, _)| *value == level) {
            return Err(FormError::Required("Course level"));
        }
        let price = match self.price.trim() {
            "" => 0.0,
            p => p.parse::<f64>().map_err(|_| FormError::NotANumber("Price"))?,
        };
        if !price.is_finite() || price < 0.0 {
            return Err(FormError::NotANumber("Price"));
        }
        Ok(CourseDraft {
            title,
            course_code,
            level,
            description: required(&self.description, "Description")?,
            category: required(&self.category, "Category")?,
            price,
            image_url: self.image_url.trim().to_string(),
            learning_objectives: clean_entries(&self.learning_objectives),
            requirements: clean_entries(&self.requirements),
            target_audience: clean_entries(&self.target_audience),
        })
    }
}

/// 课程表单里的三个动态列表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseList {
    Objectives,
    Requirements,
    Audience,
}

impl CourseList {
    pub const ALL: [CourseList; 3] = [
        CourseList::Objectives,
        CourseList::Requirements,
        CourseList::Audience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CourseList::Objectives => "Learning Objectives",
            CourseList::Requirements => "Requirements",
            CourseList::Audience => "Target Audience",
        }
    }

    pub fn entries<'a>(&self, form: &'a CourseForm) -> &'a [String] {
        match self {
            CourseList::Objectives => &form.learning_objectives,
            CourseList::Requirements => &form.requirements,
            CourseList::Audience => &form.target_audience,
        }
    }

    pub fn entries_mut<'a>(&self, form: &'a mut CourseForm) -> &'a mut Vec<String> {
        match self {
            CourseList::Objectives => &mut form.learning_objectives,
            CourseList::Requirements => &mut form.requirements,
            CourseList::Audience => &mut form.target_audience,
        }
    }
}

// ==========================================
// 作业
// ==========================================

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentForm {
    pub title: String,
    pub description: String,
    pub course_id: String,
    pub due_date: String,
    pub max_points: String,
    pub assignment_type: AssignmentType,
    pub instructions: String,
}

impl Default for AssignmentForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            course_id: String::new(),
            due_date: String::new(),
            max_points: "100".to_string(),
            assignment_type: AssignmentType::Homework,
            instructions: String::new(),
        }
    }
}

impl AssignmentForm {
    /// 预选课程 (来自 `?courseId=`)
    pub fn for_course(course_id: Option<String>) -> Self {
        Self {
            course_id: course_id.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// 截止时间按浏览者本地时区解释
    pub fn to_draft(&self) -> Result<AssignmentDraft, FormError> {
        self.to_draft_in(&Local)
    }

    pub fn to_draft_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<AssignmentDraft, FormError> {
        let title = required(&self.title, "Title")?;
        let description = required(&self.description, "Description")?;
        let course_id = required(&self.course_id, "Course")?;
        let due = date::parse_input_in(required(&self.due_date, "Due date")?.as_str(), tz)
            .ok_or(FormError::InvalidDate)?;
        let max_points: u32 = self
            .max_points
            .trim()
            .parse()
            .map_err(|_| FormError::NotANumber("Max points"))?;
        if max_points == 0 {
            return Err(FormError::OutOfRange {
                field: "Max points",
                min: 1,
                max: u32::MAX,
            });
        }
        Ok(AssignmentDraft {
            title,
            description,
            course_id,
            due_date: due.to_rfc3339(),
            max_points,
            assignment_type: self.assignment_type,
            instructions: self.instructions.trim().to_string(),
            attachments: Vec::new(),
        })
    }
}

// ==========================================
// 学习资料
// ==========================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialForm {
    pub title: String,
    pub description: String,
    pub material_type: MaterialType,
    pub file_url: String,
    pub file_name: String,
    pub external_url: String,
    pub content: String,
    pub duration: String,
    pub order: String,
    pub tags: Vec<String>,
    pub access_type: AccessType,
}

impl MaterialForm {
    pub fn to_draft(&self, course_id: &str) -> Result<MaterialDraft, FormError> {
        let title = required(&self.title, "Title")?;
        let file_based = self.material_type.is_file_based();
        let external_url = if self.material_type == MaterialType::Link {
            Some(required(&self.external_url, "External URL")?)
        } else {
            None
        };
        let duration = match self.duration.trim() {
            "" => None,
            d => Some(
                d.parse::<u32>()
                    .map_err(|_| FormError::NotANumber("Duration"))?,
            ),
        };
        let order = match self.order.trim() {
            "" => 0,
            o => o.parse::<i32>().map_err(|_| FormError::NotANumber("Order"))?,
        };
        Ok(MaterialDraft {
            title,
            description: self.description.trim().to_string(),
            course_id: course_id.to_string(),
            material_type: self.material_type,
            file_url: file_based.then(|| optional(&self.file_url)).flatten(),
            file_name: file_based.then(|| optional(&self.file_name)).flatten(),
            file_size: None,
            external_url,
            content: optional(&self.content),
            duration,
            order,
            tags: clean_entries(&self.tags),
            access_type: self.access_type,
        })
    }
}

// ==========================================
// 提交 / 消息
// ==========================================

/// 作业提交；截止时间以本次页面加载得到的值为准
pub fn submission_draft(
    content: &str,
    due: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<SubmissionDraft, FormError> {
    if date::is_past_due(due, now) {
        return Err(FormError::PastDue);
    }
    Ok(SubmissionDraft {
        content: required(content, "Submission content")?,
        attachments: Vec::new(),
    })
}

pub fn announcement_draft(course_id: &str, content: &str) -> Result<MessageDraft, FormError> {
    Ok(MessageDraft {
        course_id: Some(required(course_id, "Course")?),
        content: required(content, "Announcement")?,
        ..MessageDraft::default()
    })
}

pub fn direct_message_draft(receiver_id: &str, content: &str) -> Result<MessageDraft, FormError> {
    Ok(MessageDraft {
        receiver_id: Some(required(receiver_id, "Recipient")?),
        content: required(content, "Message")?,
        ..MessageDraft::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn test_clean_entries_drops_blanks() {
        let entries = vec![s("  Rust "), s(""), s("   "), s("Async")];
        assert_eq!(clean_entries(&entries), vec!["Rust", "Async"]);
    }

    #[test]
    fn test_add_tag_trims_and_dedups() {
        let mut tags = Vec::new();
        assert!(add_tag(&mut tags, " html "));
        assert!(!add_tag(&mut tags, "html"));
        assert!(!add_tag(&mut tags, "   "));
        assert!(add_tag(&mut tags, "css"));
        assert_eq!(tags, vec!["html", "css"]);
    }

    #[test]
    fn test_parse_grade_bounds() {
        assert_eq!(parse_grade("0", 50), Ok(0.0));
        assert_eq!(parse_grade(" 50 ", 50), Ok(50.0));
        assert_eq!(parse_grade("42.5", 50), Ok(42.5));
        assert!(matches!(
            parse_grade("51", 50),
            Err(FormError::OutOfRange { max: 50, .. })
        ));
        assert!(parse_grade("-1", 50).is_err());
        assert_eq!(parse_grade("abc", 50), Err(FormError::NotANumber("Grade")));
        assert!(parse_grade("NaN", 50).is_err());
    }

    #[test]
    fn test_parse_progress() {
        assert_eq!(parse_progress("75"), Ok(75.0));
        assert!(parse_progress("101").is_err());
    }

    #[test]
    fn test_course_form_to_draft() {
        let form = CourseForm {
            title: s(" Rust 101 "),
            course_code: s(" cs101 "),
            level: s("beginner"),
            description: s("Intro"),
            category: s("computer-science"),
            price: s("19.5"),
            learning_objectives: vec![s("Ownership"), s(" ")],
            ..CourseForm::default()
        };
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.title, "Rust 101");
        assert_eq!(draft.course_code, "CS101");
        assert_eq!(draft.level, "beginner");
        assert_eq!(draft.price, 19.5);
        assert_eq!(draft.learning_objectives, vec!["Ownership"]);
        assert!(draft.requirements.is_empty());
        assert!(draft.target_audience.is_empty());
    }

    #[test]
    fn test_course_form_requires_title() {
        let form = CourseForm {
            description: s("Intro"),
            ..CourseForm::default()
        };
        assert_eq!(form.to_draft(), Err(FormError::Required("Title")));
    }

    #[test]
    fn test_course_form_requires_code_and_level() {
        let base = CourseForm {
            title: s("Rust 101"),
            description: s("Intro"),
            category: s("computer-science"),
            level: s("advanced"),
            ..CourseForm::default()
        };
        assert_eq!(base.to_draft(), Err(FormError::Required("Course code")));

        let unknown_level = CourseForm {
            course_code: s("CS301"),
            level: s("expert"),
            ..base.clone()
        };
        assert_eq!(unknown_level.to_draft(), Err(FormError::Required("Course level")));

        let draft = CourseForm {
            course_code: s("CS301"),
            ..base
        }
        .to_draft()
        .unwrap();
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["courseCode"], "CS301");
        assert_eq!(body["level"], "advanced");
        assert_eq!(level_label("advanced"), Some("300L"));
        assert_eq!(level_label(""), None);
    }

    #[test]
    fn test_course_list_accessors() {
        let mut form = CourseForm::default();
        CourseList::Requirements
            .entries_mut(&mut form)
            .push(s("Basic CLI"));
        assert_eq!(CourseList::Requirements.entries(&form).len(), 2);
        assert_eq!(CourseList::Audience.entries(&form).len(), 1);
    }

    #[test]
    fn test_assignment_form_preselects_course() {
        let form = AssignmentForm::for_course(Some(s("c1")));
        assert_eq!(form.course_id, "c1");
        assert_eq!(form.max_points, "100");
    }

    #[test]
    fn test_assignment_form_to_draft() {
        let form = AssignmentForm {
            title: s("HW1"),
            description: s("First"),
            course_id: s("c1"),
            due_date: s("2026-03-05T10:30"),
            ..AssignmentForm::default()
        };
        let utc_minus_5 = FixedOffset::west_opt(5 * 3600).unwrap();
        let draft = form.to_draft_in(&utc_minus_5).unwrap();
        assert_eq!(draft.max_points, 100);
        assert_eq!(draft.due_date, "2026-03-05T15:30:00+00:00");
        assert_eq!(
            form.to_draft_in(&Utc).unwrap().due_date,
            "2026-03-05T10:30:00+00:00"
        );
    }

    #[test]
    fn test_assignment_form_rejects_bad_values() {
        let base = AssignmentForm {
            title: s("HW1"),
            description: s("First"),
            course_id: s("c1"),
            due_date: s("2026-03-05"),
            ..AssignmentForm::default()
        };
        let bad_date = AssignmentForm {
            due_date: s("soon"),
            ..base.clone()
        };
        assert_eq!(bad_date.to_draft(), Err(FormError::InvalidDate));
        let zero = AssignmentForm {
            max_points: s("0"),
            ..base.clone()
        };
        assert!(zero.to_draft().is_err());
        let no_course = AssignmentForm {
            course_id: s(""),
            ..base
        };
        assert_eq!(no_course.to_draft(), Err(FormError::Required("Course")));
    }

    #[test]
    fn test_material_form_link_requires_url() {
        let form = MaterialForm {
            title: s("Docs"),
            material_type: MaterialType::Link,
            ..MaterialForm::default()
        };
        assert_eq!(
            form.to_draft("c1"),
            Err(FormError::Required("External URL"))
        );
    }

    #[test]
    fn test_material_form_drops_irrelevant_fields() {
        let form = MaterialForm {
            title: s("Notes"),
            material_type: MaterialType::Quiz,
            file_url: s("https://x/y.pdf"),
            duration: s("15"),
            tags: vec![s("week1"), s(" ")],
            ..MaterialForm::default()
        };
        let draft = form.to_draft("c1").unwrap();
        assert_eq!(draft.course_id, "c1");
        assert_eq!(draft.file_url, None);
        assert_eq!(draft.duration, Some(15));
        assert_eq!(draft.tags, vec!["week1"]);
    }

    #[test]
    fn test_submission_blocked_after_due() {
        let due = Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2026, 3, 5, 11, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 3, 5, 13, 0, 0).unwrap();
        assert!(submission_draft("my work", due, before).is_ok());
        assert_eq!(
            submission_draft("my work", due, after),
            Err(FormError::PastDue)
        );
        assert_eq!(
            submission_draft("  ", due, before),
            Err(FormError::Required("Submission content"))
        );
    }

    #[test]
    fn test_message_drafts() {
        let a = announcement_draft("c1", "Exam moved").unwrap();
        assert_eq!(a.course_id.as_deref(), Some("c1"));
        assert_eq!(a.receiver_id, None);
        let d = direct_message_draft("u2", "hi").unwrap();
        assert_eq!(d.receiver_id.as_deref(), Some("u2"));
        assert!(direct_message_draft("", "hi").is_err());
    }
}
