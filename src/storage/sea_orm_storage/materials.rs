//! 班级资料存储操作

use super::SeaOrmStorage;
use crate::entity::class_materials::{ActiveModel, Column, Entity as ClassMaterials};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    materials::{
        entities::{Material, MaterialType},
        requests::{CreateMaterialRequest, MaterialListQuery, UpdateMaterialRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建资料
    pub async fn create_material_impl(
        &self,
        class_id: i64,
        uploaded_by: i64,
        req: CreateMaterialRequest,
    ) -> Result<Material> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            uploaded_by: Set(uploaded_by),
            title: Set(req.title),
            description: Set(req.description),
            material_type: Set(req
                .material_type
                .unwrap_or(MaterialType::Document)
                .to_string()),
            file_url: Set(req.file_url),
            file_name: Set(req.file_name),
            file_size: Set(req.file_size),
            mime_type: Set(req.mime_type),
            download_count: Set(0),
            is_visible: Set(req.is_visible.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建资料失败: {e}")))?;

        Ok(result.into_material())
    }

    /// 分页列出资料，学生视角只含可见资料
    pub async fn list_materials_impl(
        &self,
        class_id: i64,
        query: MaterialListQuery,
    ) -> Result<PaginatedResponse<Material>> {
        let page = query.page.max(1) as u64;
        let limit = query.limit.max(1) as u64;

        let mut select = ClassMaterials::find().filter(Column::ClassId.eq(class_id));
        if query.visible_only {
            select = select.filter(Column::IsVisible.eq(true));
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, limit);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询资料总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询资料页数失败: {e}")))?;

        let materials = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询资料列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: materials.into_iter().map(|m| m.into_material()).collect(),
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: limit as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 获取单个资料（限定班级范围）
    pub async fn get_material_impl(
        &self,
        class_id: i64,
        material_id: i64,
    ) -> Result<Option<Material>> {
        let result = ClassMaterials::find_by_id(material_id)
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询资料失败: {e}")))?;

        Ok(result.map(|m| m.into_material()))
    }

    /// 更新资料
    pub async fn update_material_impl(
        &self,
        class_id: i64,
        material_id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>> {
        let Some(_) = self.get_material_impl(class_id, material_id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(material_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(material_type) = update.material_type {
            model.material_type = Set(material_type.to_string());
        }
        if let Some(file_url) = update.file_url {
            model.file_url = Set(Some(file_url));
        }
        if let Some(is_visible) = update.is_visible {
            model.is_visible = Set(is_visible);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新资料失败: {e}")))?;

        self.get_material_impl(class_id, material_id).await
    }

    /// 删除资料
    pub async fn delete_material_impl(&self, class_id: i64, material_id: i64) -> Result<bool> {
        let result = ClassMaterials::delete_many()
            .filter(
                Condition::all()
                    .add(Column::Id.eq(material_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除资料失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 下载计数 +1 并返回最新记录
    pub async fn record_material_download_impl(
        &self,
        class_id: i64,
        material_id: i64,
    ) -> Result<Option<Material>> {
        let Some(material) = ClassMaterials::find_by_id(material_id)
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询资料失败: {e}")))?
        else {
            return Ok(None);
        };

        let next_count = material.download_count + 1;
        let mut model: ActiveModel = material.into();
        model.download_count = Set(next_count);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新下载计数失败: {e}")))?;

        Ok(Some(result.into_material()))
    }
}
