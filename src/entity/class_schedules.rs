//! 课程安排实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
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
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_session(self) -> crate::models::schedules::entities::ScheduleSession {
        use crate::models::schedules::entities::{ScheduleSession, ScheduleStatus};
        use chrono::{DateTime, Utc};

        ScheduleSession {
            id: self.id,
            class_id: self.class_id,
            title: self.title,
            description: self.description,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            zoom_link: self.zoom_link,
            notes: self.notes,
            status: self
                .status
                .parse::<ScheduleStatus>()
                .unwrap_or(ScheduleStatus::Scheduled),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
