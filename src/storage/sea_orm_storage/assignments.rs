//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::class_assignments::{ActiveModel, Column, Entity as ClassAssignments};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    assignments::{
        entities::{Assignment, AssignmentStatus},
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        class_id: i64,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            created_by: Set(created_by),
            title: Set(req.title),
            description: Set(req.description),
            skill: Set(req.skill.to_string()),
            due_date: Set(req.due_date.map(|d| d.timestamp())),
            total_points: Set(req.total_points.unwrap_or(10.0)),
            status: Set(req.status.unwrap_or(AssignmentStatus::Draft).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 分页列出作业，可按状态过滤
    pub async fn list_assignments_impl(
        &self,
        class_id: i64,
        query: AssignmentListQuery,
    ) -> Result<PaginatedResponse<Assignment>> {
        let page = query.page.max(1) as u64;
        let limit = query.limit.max(1) as u64;

        let mut select = ClassAssignments::find().filter(Column::ClassId.eq(class_id));

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, limit);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询作业总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询作业页数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: limit as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 获取单个作业（限定班级范围）
    pub async fn get_assignment_impl(
        &self,
        class_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        let result = ClassAssignments::find_by_id(assignment_id)
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        class_id: i64,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let Some(_) = self.get_assignment_impl(class_id, assignment_id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(assignment_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(skill) = update.skill {
            model.skill = Set(skill.to_string());
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(Some(due_date.timestamp()));
        }
        if let Some(total_points) = update.total_points {
            model.total_points = Set(total_points);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_impl(class_id, assignment_id).await
    }

    /// 删除作业
    pub async fn delete_assignment_impl(
        &self,
        class_id: i64,
        assignment_id: i64,
    ) -> Result<bool> {
        let result = ClassAssignments::delete_many()
            .filter(
                Condition::all()
                    .add(Column::Id.eq(assignment_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
