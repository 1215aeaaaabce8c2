use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 资料类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub enum MaterialType {
    Document,
    Video,
    Audio,
    Link,
}

impl<'de> Deserialize<'de> for MaterialType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<MaterialType>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的资料类型: '{s}'. 支持的类型: document, video, audio, link"
            ))
        })
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialType::Document => write!(f, "document"),
            MaterialType::Video => write!(f, "video"),
            MaterialType::Audio => write!(f, "audio"),
            MaterialType::Link => write!(f, "link"),
        }
    }
}

impl std::str::FromStr for MaterialType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(MaterialType::Document),
            "video" => Ok(MaterialType::Video),
            "audio" => Ok(MaterialType::Audio),
            "link" => Ok(MaterialType::Link),
            _ => Err(format!("Invalid material type: {s}")),
        }
    }
}

// 班级资料
//
// 文件本体存放在外部存储，这里只保存 URL 和元数据。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct Material {
    pub id: i64,
    pub class_id: i64,
    pub uploaded_by: i64,
    pub title: String,
    pub description: Option<String>,
    pub material_type: MaterialType,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub download_count: i32,
    pub is_visible: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
