//! 通知存储操作
//!
//! 公告发布时批量写入通知行，投递由外部系统消费，
//! 写入失败不回滚公告本身。

use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Entity as Notifications};
use crate::errors::{ClassroomError, Result};
use crate::models::notifications::entities::BulkNotificationRequest;
use sea_orm::{EntityTrait, Set};

impl SeaOrmStorage {
    /// 批量写入通知行，返回写入条数
    pub async fn create_bulk_notifications_impl(
        &self,
        request: BulkNotificationRequest,
    ) -> Result<i64> {
        if request.user_ids.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();

        let models: Vec<ActiveModel> = request
            .user_ids
            .iter()
            .map(|&user_id| ActiveModel {
                user_id: Set(user_id),
                notification_type: Set(request.notification_type.clone()),
                title: Set(request.title.clone()),
                message: Set(request.message.clone()),
                action_url: Set(request.action_url.clone()),
                related_entity_type: Set(request.related_entity_type.clone()),
                related_entity_id: Set(request.related_entity_id),
                is_read: Set(false),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        let count = models.len() as i64;

        Notifications::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("批量写入通知失败: {e}")))?;

        Ok(count)
    }
}
