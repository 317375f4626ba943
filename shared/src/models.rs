//! 领域模型 (Domain Models)
//!
//! 与后端 JSON 保持一致：字段为 camelCase，主键为 `_id`。

mod assignment;
mod communication;
mod course;
mod enrollment;
mod instructor;
mod material;
mod user;

pub use assignment::*;
pub use communication::*;
pub use course::*;
pub use enrollment::*;
pub use instructor::*;
pub use material::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// 拥有后端主键的实体
pub trait Identified {
    fn id(&self) -> &str;
}

/// 可能被后端 populate 的引用
///
/// 同一字段有时是 id 字符串，有时是完整对象 (`Course | string`)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef<T> {
    Id(String),
    Populated(Box<T>),
}

impl<T: Identified> EntityRef<T> {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Populated(item) => item.id(),
        }
    }

    /// 已 populate 时返回对象
    pub fn populated(&self) -> Option<&T> {
        match self {
            EntityRef::Id(_) => None,
            EntityRef::Populated(item) => Some(item),
        }
    }
}

impl<T> From<String> for EntityRef<T> {
    fn from(id: String) -> Self {
        EntityRef::Id(id)
    }
}

/// 附件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub uploaded_at: Option<chrono::DateTime<chrono::Utc>>,
}
