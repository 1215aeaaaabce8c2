//! 班级公告存储操作

use super::SeaOrmStorage;
use crate::entity::class_announcements::{ActiveModel, Column, Entity as ClassAnnouncements};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    announcements::{
        entities::Announcement,
        requests::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建公告
    pub async fn create_announcement_impl(
        &self,
        class_id: i64,
        author_id: i64,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            author_id: Set(author_id),
            title: Set(req.title),
            content: Set(req.content),
            is_pinned: Set(req.is_pinned),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 分页列出公告，置顶在前、新的在前
    pub async fn list_announcements_impl(
        &self,
        class_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<PaginatedResponse<Announcement>> {
        let page = page.max(1) as u64;
        let limit = limit.max(1) as u64;

        let paginator = ClassAnnouncements::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::IsPinned)
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, limit);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询公告总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询公告页数失败: {e}")))?;

        let announcements = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: announcements
                .into_iter()
                .map(|m| m.into_announcement())
                .collect(),
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: limit as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 获取单个公告（限定班级范围）
    pub async fn get_announcement_impl(
        &self,
        class_id: i64,
        announcement_id: i64,
    ) -> Result<Option<Announcement>> {
        let result = ClassAnnouncements::find_by_id(announcement_id)
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 更新公告
    pub async fn update_announcement_impl(
        &self,
        class_id: i64,
        announcement_id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        let Some(_) = self.get_announcement_impl(class_id, announcement_id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(announcement_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(content) = update.content {
            model.content = Set(content);
        }
        if let Some(is_pinned) = update.is_pinned {
            model.is_pinned = Set(is_pinned);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新公告失败: {e}")))?;

        self.get_announcement_impl(class_id, announcement_id).await
    }

    /// 删除公告
    pub async fn delete_announcement_impl(
        &self,
        class_id: i64,
        announcement_id: i64,
    ) -> Result<bool> {
        let result = ClassAnnouncements::delete_many()
            .filter(
                Condition::all()
                    .add(Column::Id.eq(announcement_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
