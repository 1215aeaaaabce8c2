use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级公告
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: i64,
    pub class_id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
