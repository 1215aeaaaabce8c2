use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 通知类型常量，写库时使用
pub mod notification_type {
    pub const CLASS_ANNOUNCEMENT: &str = "class_announcement";
}

/// 关联实体类型常量
pub mod related_entity_type {
    pub const CLASS: &str = "class";
}

// 站内通知，公告发布时批量写入
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub action_url: Option<String>,
    pub related_entity_type: Option<String>,
    pub related_entity_id: Option<i64>,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 批量写入通知的参数
#[derive(Debug, Clone)]
pub struct BulkNotificationRequest {
    pub user_ids: Vec<i64>,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub action_url: Option<String>,
    pub related_entity_type: Option<String>,
    pub related_entity_id: Option<i64>,
}
