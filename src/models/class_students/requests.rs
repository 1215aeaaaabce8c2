use super::entities::EnrollmentStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 教师添加单个学生
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct EnrollStudentRequest {
    pub student_id: i64,
}

// 教师批量添加学生
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct BulkEnrollRequest {
    pub student_ids: Vec<i64>,
}

// 学生通过邀请码加入班级
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct JoinClassRequest {
    pub invite_code: String,
}

// 报名记录更新（教师人工修正）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct UpdateEnrollmentRequest {
    pub status: Option<EnrollmentStatus>,
    pub progress: Option<f64>,
}

// 班级学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<EnrollmentStatus>,
}

// 报名记录列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct EnrollmentListQuery {
    pub page: i64,
    pub limit: i64,
    pub status: Option<EnrollmentStatus>,
}
