use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 报名状态
//
// 状态机：enroll/join → active，drop/remove/leave → dropped，
// 班级完成时 active → completed。dropped 记录可以被重新激活，
// inactive 仅作管理端人工标记，与 active 一样计入容量。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub enum EnrollmentStatus {
    Active,
    Inactive,
    Dropped,
    Completed,
}

impl EnrollmentStatus {
    /// 是否计入班级容量
    pub fn counts_against_capacity(&self) -> bool {
        matches!(self, EnrollmentStatus::Active | EnrollmentStatus::Inactive)
    }
}

impl<'de> Deserialize<'de> for EnrollmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<EnrollmentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的报名状态: '{s}'. 支持的状态: active, inactive, dropped, completed"
            ))
        })
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Active => write!(f, "active"),
            EnrollmentStatus::Inactive => write!(f, "inactive"),
            EnrollmentStatus::Dropped => write!(f, "dropped"),
            EnrollmentStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EnrollmentStatus::Active),
            "inactive" => Ok(EnrollmentStatus::Inactive),
            "dropped" => Ok(EnrollmentStatus::Dropped),
            "completed" => Ok(EnrollmentStatus::Completed),
            _ => Err(format!("Invalid enrollment status: {s}")),
        }
    }
}

// 报名记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-student.ts")]
pub struct Enrollment {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub status: EnrollmentStatus,
    // 0–100
    pub progress: f64,
    pub joined_at: chrono::DateTime<chrono::Utc>,
    pub removed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub removed_by: Option<i64>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_capacity_counting() {
        assert!(EnrollmentStatus::Active.counts_against_capacity());
        assert!(EnrollmentStatus::Inactive.counts_against_capacity());
        assert!(!EnrollmentStatus::Dropped.counts_against_capacity());
        assert!(!EnrollmentStatus::Completed.counts_against_capacity());
    }

    #[test]
    fn test_status_round_trip() {
        for status in ["active", "inactive", "dropped", "completed"] {
            assert_eq!(
                EnrollmentStatus::from_str(status).unwrap().to_string(),
                status
            );
        }
        assert!(EnrollmentStatus::from_str("expelled").is_err());
    }
}
