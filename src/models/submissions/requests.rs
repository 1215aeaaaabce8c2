use super::entities::SubmissionStatus;
use crate::models::assignments::entities::AssignmentSkill;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 学生提交作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAssignmentRequest {
    pub content: String,
    pub word_count: Option<i32>,
}

// 教师评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub score: f64,
    pub feedback: Option<String>,
}

// 提交列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<SubmissionStatus>,
    pub skill: Option<AssignmentSkill>,
}

// 提交列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct SubmissionListQuery {
    pub page: i64,
    pub limit: i64,
    pub status: Option<SubmissionStatus>,
    pub skill: Option<AssignmentSkill>,
}
