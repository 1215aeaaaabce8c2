use super::entities::MaterialType;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 创建资料请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct CreateMaterialRequest {
    pub title: String,
    pub description: Option<String>,
    pub material_type: Option<MaterialType>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub is_visible: Option<bool>,
}

// 更新资料请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct UpdateMaterialRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub material_type: Option<MaterialType>,
    pub file_url: Option<String>,
    pub is_visible: Option<bool>,
}

// 资料列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct MaterialListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}

// 资料列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct MaterialListQuery {
    pub page: i64,
    pub limit: i64,
    // 学生只能看到可见资料
    pub visible_only: bool,
}
