use super::entities::{ClassStatus, VstepLevel};
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub status: Option<ClassStatus>,
    pub level: Option<VstepLevel>,
}

// 管理端班级查询参数，支持完整筛选和排序
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct AdminClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub status: Option<ClassStatus>,
    pub level: Option<VstepLevel>,
    pub teacher_id: Option<i64>,
    pub sort_by: Option<ClassSortBy>,
    pub sort_order: Option<SortOrder>,
}

// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum ClassSortBy {
    CreatedAt,
    Name,
    Level,
    Status,
    StartDate,
}

// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum SortOrder {
    Asc,
    Desc,
}

// 创建班级请求
//
// teacher_id 仅管理员可指定；教师创建时自动使用当前登录教师的 ID。
// 新班级统一以 draft 状态创建，激活后学生才能通过邀请码加入。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub teacher_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub level: Option<VstepLevel>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub max_students: Option<i32>,
}

// 更新班级请求
//
// status 只接受合法迁移（draft→active、active→completed、draft/active→archived），
// 其余迁移由专门的 activate/complete 接口或直接拒绝。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: Option<VstepLevel>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub max_students: Option<i32>,
    pub status: Option<ClassStatus>,
}

// 管理端指派教师请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct AssignTeacherRequest {
    pub teacher_id: i64,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClassListQuery {
    pub page: i64,
    pub limit: i64,
    pub search: Option<String>,
    pub status: Option<ClassStatus>,
    pub level: Option<VstepLevel>,
    pub teacher_id: Option<i64>,
    pub sort_by: Option<ClassSortBy>,
    pub sort_order: Option<SortOrder>,
}
