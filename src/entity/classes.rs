//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub level: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub max_students: i32,
    #[sea_orm(unique)]
    pub invite_code: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::class_students::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::class_materials::Entity")]
    Materials,
    #[sea_orm(has_many = "super::class_schedules::Entity")]
    Schedules,
    #[sea_orm(has_many = "super::class_announcements::Entity")]
    Announcements,
    #[sea_orm(has_many = "super::class_assignments::Entity")]
    Assignments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::class_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::class_materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Materials.def()
    }
}

impl Related<super::class_schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl Related<super::class_announcements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Announcements.def()
    }
}

impl Related<super::class_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        use crate::models::classes::entities::{Class, ClassStatus, VstepLevel};
        use chrono::{DateTime, Utc};

        Class {
            id: self.id,
            teacher_id: self.teacher_id,
            name: self.name,
            description: self.description,
            level: self.level.parse::<VstepLevel>().unwrap_or(VstepLevel::B1),
            start_date: self.start_date,
            end_date: self.end_date,
            max_students: self.max_students,
            invite_code: self.invite_code,
            status: self
                .status
                .parse::<ClassStatus>()
                .unwrap_or(ClassStatus::Draft),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
