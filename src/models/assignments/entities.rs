use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentStatus {
    Draft,
    Published,
    Closed,
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AssignmentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的作业状态: '{s}'. 支持的状态: draft, published, closed"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Draft => write!(f, "draft"),
            AssignmentStatus::Published => write!(f, "published"),
            AssignmentStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(AssignmentStatus::Draft),
            "published" => Ok(AssignmentStatus::Published),
            "closed" => Ok(AssignmentStatus::Closed),
            _ => Err(format!("Invalid assignment status: {s}")),
        }
    }
}

// VSTEP 技能
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentSkill {
    Listening,
    Reading,
    Writing,
    Speaking,
}

impl<'de> Deserialize<'de> for AssignmentSkill {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AssignmentSkill>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的技能: '{s}'. 支持的技能: listening, reading, writing, speaking"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentSkill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentSkill::Listening => write!(f, "listening"),
            AssignmentSkill::Reading => write!(f, "reading"),
            AssignmentSkill::Writing => write!(f, "writing"),
            AssignmentSkill::Speaking => write!(f, "speaking"),
        }
    }
}

impl std::str::FromStr for AssignmentSkill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listening" => Ok(AssignmentSkill::Listening),
            "reading" => Ok(AssignmentSkill::Reading),
            "writing" => Ok(AssignmentSkill::Writing),
            "speaking" => Ok(AssignmentSkill::Speaking),
            _ => Err(format!("Invalid assignment skill: {s}")),
        }
    }
}

// 作业
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub class_id: i64,
    pub created_by: i64,
    pub title: String,
    pub description: Option<String>,
    pub skill: AssignmentSkill,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub total_points: f64,
    pub status: AssignmentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
