use serde::{Deserialize, Serialize};
use ts_rs::TS;

// VSTEP 等级
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum VstepLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
}

impl<'de> Deserialize<'de> for VstepLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<VstepLevel>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的 VSTEP 等级: '{s}'. 支持的等级: A1, A2, B1, B2, C1"
            ))
        })
    }
}

impl std::fmt::Display for VstepLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VstepLevel::A1 => write!(f, "A1"),
            VstepLevel::A2 => write!(f, "A2"),
            VstepLevel::B1 => write!(f, "B1"),
            VstepLevel::B2 => write!(f, "B2"),
            VstepLevel::C1 => write!(f, "C1"),
        }
    }
}

impl std::str::FromStr for VstepLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A1" => Ok(VstepLevel::A1),
            "A2" => Ok(VstepLevel::A2),
            "B1" => Ok(VstepLevel::B1),
            "B2" => Ok(VstepLevel::B2),
            "C1" => Ok(VstepLevel::C1),
            _ => Err(format!("Invalid VSTEP level: {s}")),
        }
    }
}

// 班级状态
//
// 状态机：draft → active → completed，draft/active 可归档。
// completed 和 archived 是终态。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum ClassStatus {
    Draft,
    Active,
    Completed,
    Archived,
}

impl ClassStatus {
    /// 该状态下是否接受新报名
    pub fn accepts_enrollment(&self) -> bool {
        matches!(self, ClassStatus::Draft | ClassStatus::Active)
    }

    /// 状态迁移是否合法
    pub fn can_transition_to(&self, next: ClassStatus) -> bool {
        matches!(
            (self, next),
            (ClassStatus::Draft, ClassStatus::Active)
                | (ClassStatus::Active, ClassStatus::Completed)
                | (ClassStatus::Draft, ClassStatus::Archived)
                | (ClassStatus::Active, ClassStatus::Archived)
        )
    }
}

impl<'de> Deserialize<'de> for ClassStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ClassStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的班级状态: '{s}'. 支持的状态: draft, active, completed, archived"
            ))
        })
    }
}

impl std::fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassStatus::Draft => write!(f, "draft"),
            ClassStatus::Active => write!(f, "active"),
            ClassStatus::Completed => write!(f, "completed"),
            ClassStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for ClassStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ClassStatus::Draft),
            "active" => Ok(ClassStatus::Active),
            "completed" => Ok(ClassStatus::Completed),
            "archived" => Ok(ClassStatus::Archived),
            _ => Err(format!("Invalid class status: {s}")),
        }
    }
}

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    pub id: i64,
    pub teacher_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub level: VstepLevel,
    // YYYY-MM-DD
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub max_students: i32,
    pub invite_code: String,
    pub status: ClassStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_transitions() {
        assert!(ClassStatus::Draft.can_transition_to(ClassStatus::Active));
        assert!(ClassStatus::Active.can_transition_to(ClassStatus::Completed));
        assert!(ClassStatus::Draft.can_transition_to(ClassStatus::Archived));
        assert!(ClassStatus::Active.can_transition_to(ClassStatus::Archived));

        // 逆向与跳跃迁移都不允许
        assert!(!ClassStatus::Draft.can_transition_to(ClassStatus::Completed));
        assert!(!ClassStatus::Active.can_transition_to(ClassStatus::Draft));
        assert!(!ClassStatus::Completed.can_transition_to(ClassStatus::Active));
        assert!(!ClassStatus::Archived.can_transition_to(ClassStatus::Active));
    }

    #[test]
    fn test_enrollment_window() {
        assert!(ClassStatus::Draft.accepts_enrollment());
        assert!(ClassStatus::Active.accepts_enrollment());
        assert!(!ClassStatus::Completed.accepts_enrollment());
        assert!(!ClassStatus::Archived.accepts_enrollment());
    }

    #[test]
    fn test_level_round_trip() {
        for level in ["A1", "A2", "B1", "B2", "C1"] {
            assert_eq!(VstepLevel::from_str(level).unwrap().to_string(), level);
        }
        assert!(VstepLevel::from_str("D1").is_err());
    }
}
