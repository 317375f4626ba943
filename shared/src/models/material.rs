use super::{Course, EntityRef, Identified, UserSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    #[default]
    Document,
    Video,
    Audio,
    Link,
    Quiz,
    Assignment,
    Other,
}

impl MaterialType {
    pub const ALL: [MaterialType; 7] = [
        MaterialType::Document,
        MaterialType::Video,
        MaterialType::Audio,
        MaterialType::Link,
        MaterialType::Quiz,
        MaterialType::Assignment,
        MaterialType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Document => "document",
            MaterialType::Video => "video",
            MaterialType::Audio => "audio",
            MaterialType::Link => "link",
            MaterialType::Quiz => "quiz",
            MaterialType::Assignment => "assignment",
            MaterialType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::Document => "Document",
            MaterialType::Video => "Video",
            MaterialType::Audio => "Audio",
            MaterialType::Link => "External Link",
            MaterialType::Quiz => "Quiz",
            MaterialType::Assignment => "Assignment",
            MaterialType::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MaterialType::Document => "📄",
            MaterialType::Video => "🎬",
            MaterialType::Audio => "🎵",
            MaterialType::Link => "🔗",
            MaterialType::Quiz => "📝",
            MaterialType::Assignment => "📋",
            MaterialType::Other => "📎",
        }
    }

    /// 该类型是否以上传文件为主体
    pub fn is_file_based(&self) -> bool {
        matches!(
            self,
            MaterialType::Document | MaterialType::Video | MaterialType::Audio
        )
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    #[default]
    Free,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMaterial {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub course: EntityRef<Course>,
    #[serde(default)]
    pub instructor: Option<EntityRef<UserSummary>>,
    pub material_type: MaterialType,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// 分钟
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub access_type: AccessType,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for LearningMaterial {
    fn id(&self) -> &str {
        &self.id
    }
}

impl LearningMaterial {
    /// 打开材料时使用的链接：优先外部链接，其次文件地址
    pub fn href(&self) -> Option<&str> {
        self.external_url
            .as_deref()
            .or(self.file_url.as_deref())
            .filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDraft {
    pub title: String,
    pub description: String,
    pub course_id: String,
    pub material_type: MaterialType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub order: i32,
    pub tags: Vec<String>,
    pub access_type: AccessType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<AccessType>,
}

/// 排序请求中的单项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialOrder {
    pub id: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPublishResponse {
    #[serde(default)]
    pub message: String,
    pub material: LearningMaterial,
}
