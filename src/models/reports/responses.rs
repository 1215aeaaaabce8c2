use serde::Serialize;
use ts_rs::TS;

// 各等级的班级数量
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct LevelCount {
    pub level: String,
    pub count: i64,
}

// 管理端总览报告
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct OverviewReport {
    pub total_classes: i64,
    pub draft_classes: i64,
    pub active_classes: i64,
    pub completed_classes: i64,
    pub archived_classes: i64,
    pub total_enrollments: i64,
    pub level_distribution: Vec<LevelCount>,
}
