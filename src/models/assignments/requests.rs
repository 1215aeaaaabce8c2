use super::entities::{AssignmentSkill, AssignmentStatus};
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub skill: AssignmentSkill,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub total_points: Option<f64>,
    pub status: Option<AssignmentStatus>,
}

// 更新作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub skill: Option<AssignmentSkill>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub total_points: Option<f64>,
    pub status: Option<AssignmentStatus>,
}

// 作业列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<AssignmentStatus>,
}

// 作业列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct AssignmentListQuery {
    pub page: i64,
    pub limit: i64,
    pub status: Option<AssignmentStatus>,
}
