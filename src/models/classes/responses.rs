use super::entities::{Class, ClassStatus, VstepLevel};
use serde::Serialize;
use ts_rs::TS;

// 列表行：班级 + 当前活跃学生数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassWithStudentCount {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    pub student_count: i64,
}

// 重新生成邀请码的响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct InviteCodeResponse {
    pub invite_code: String,
}

// 学生通过邀请码预览班级时返回的字段子集，不泄露邀请码之外的管理信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassPreviewResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub level: VstepLevel,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub student_count: i64,
    pub max_students: i32,
}

// 按报名状态统计的学生人数
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct EnrollmentBreakdown {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub completed: i64,
    pub dropped: i64,
}

// 班级统计
//
// completion_rate 与 average_progress 同值，沿用既有对外口径。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassStatsResponse {
    pub class_id: i64,
    pub name: String,
    pub level: VstepLevel,
    pub status: ClassStatus,
    pub max_students: i32,
    pub students: EnrollmentBreakdown,
    pub materials_count: i64,
    pub average_progress: f64,
    pub completion_rate: f64,
}
