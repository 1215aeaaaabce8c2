use super::entities::Enrollment;
use serde::Serialize;
use ts_rs::TS;

// 列表行：报名记录 + 学生概要
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct EnrollmentWithStudent {
    #[serde(flatten)]
    #[ts(flatten)]
    pub enrollment: Enrollment,
    pub student_name: String,
    pub student_email: String,
}

// 批量添加失败项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct BulkEnrollFailure {
    pub student_id: i64,
    pub reason: String,
}

// 批量添加结果：整体总是成功，逐项记录成败
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct BulkEnrollResponse {
    pub success: Vec<i64>,
    pub failed: Vec<BulkEnrollFailure>,
}

// 学生视角的班级行：班级信息 + 本人报名记录
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct StudentClassView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: crate::models::classes::entities::Class,
    pub enrollment: Enrollment,
}
