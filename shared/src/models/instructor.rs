use serde::{Deserialize, Deserializer, Serialize};

/// 讲师面板汇总数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorStats {
    #[serde(default)]
    pub total_courses: u32,
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub assignments_to_grade: u32,
    /// 后端以字符串返回 (如 `"4.5"`)，也兼容数字
    #[serde(default, deserialize_with = "rating_from_any")]
    pub average_rating: Option<String>,
}

fn rating_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<Rating>::deserialize(deserializer)? {
        Some(Rating::Text(s)) if !s.trim().is_empty() => Some(s),
        Some(Rating::Number(n)) => Some(format!("{:.1}", n)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_accepts_string_and_number() {
        let a: InstructorStats =
            serde_json::from_str(r#"{"totalCourses":3,"averageRating":"4.5"}"#).unwrap();
        assert_eq!(a.average_rating.as_deref(), Some("4.5"));
        let b: InstructorStats = serde_json::from_str(r#"{"averageRating":4}"#).unwrap();
        assert_eq!(b.average_rating.as_deref(), Some("4.0"));
        let c: InstructorStats = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(c.average_rating, None);
    }
}
