use super::entities::AttendanceStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 创建课程安排请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct CreateScheduleRequest {
    pub title: String,
    pub description: Option<String>,
    // YYYY-MM-DD
    pub date: String,
    // HH:MM
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub zoom_link: Option<String>,
    pub notes: Option<String>,
}

// 课程/考勤列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    // YYYY-MM，只返回该月份
    pub month: Option<String>,
}

// 单个学生的考勤项
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct AttendanceItem {
    pub student_id: i64,
    pub status: AttendanceStatus,
    pub note: Option<String>,
}

// 批量点名请求：按 (班级, 学生, 日期) 更新插入
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct MarkAttendanceRequest {
    // YYYY-MM-DD
    pub session_date: String,
    pub records: Vec<AttendanceItem>,
}

// 课程/考勤列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ScheduleListQuery {
    pub page: i64,
    pub limit: i64,
    pub month: Option<String>,
}
