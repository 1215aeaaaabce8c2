use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        // 邀请码唯一性由唯一索引保证，插入冲突时由存储层重新生成
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .col(ColumnDef::new(Classes::Description).text().null())
                    .col(ColumnDef::new(Classes::Level).string().not_null())
                    .col(ColumnDef::new(Classes::StartDate).string().null())
                    .col(ColumnDef::new(Classes::EndDate).string().null())
                    .col(
                        ColumnDef::new(Classes::MaxStudents)
                            .integer()
                            .not_null()
                            .default(30),
                    )
                    .col(
                        ColumnDef::new(Classes::InviteCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classes::Status).string().not_null())
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建报名记录表
        manager
            .create_table(
                Table::create()
                    .table(ClassStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassStudents::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassStudents::Status).string().not_null())
                    .col(
                        ColumnDef::new(ClassStudents::Progress)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ClassStudents::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassStudents::RemovedAt).big_integer().null())
                    .col(ColumnDef::new(ClassStudents::RemovedBy).big_integer().null())
                    .col(
                        ColumnDef::new(ClassStudents::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassStudents::Table, ClassStudents::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassStudents::Table, ClassStudents::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级资料表
        manager
            .create_table(
                Table::create()
                    .table(ClassMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassMaterials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassMaterials::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassMaterials::UploadedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassMaterials::Title).string().not_null())
                    .col(ColumnDef::new(ClassMaterials::Description).text().null())
                    .col(
                        ColumnDef::new(ClassMaterials::MaterialType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassMaterials::FileUrl).string().null())
                    .col(ColumnDef::new(ClassMaterials::FileName).string().null())
                    .col(ColumnDef::new(ClassMaterials::FileSize).big_integer().null())
                    .col(ColumnDef::new(ClassMaterials::MimeType).string().null())
                    .col(
                        ColumnDef::new(ClassMaterials::DownloadCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ClassMaterials::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ClassMaterials::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassMaterials::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassMaterials::Table, ClassMaterials::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassMaterials::Table, ClassMaterials::UploadedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程安排表
        manager
            .create_table(
                Table::create()
                    .table(ClassSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassSchedules::Title).string().not_null())
                    .col(ColumnDef::new(ClassSchedules::Description).text().null())
                    .col(ColumnDef::new(ClassSchedules::Date).string().not_null())
                    .col(ColumnDef::new(ClassSchedules::StartTime).string().not_null())
                    .col(ColumnDef::new(ClassSchedules::EndTime).string().not_null())
                    .col(ColumnDef::new(ClassSchedules::Location).string().null())
                    .col(ColumnDef::new(ClassSchedules::ZoomLink).string().null())
                    .col(ColumnDef::new(ClassSchedules::Notes).text().null())
                    .col(ColumnDef::new(ClassSchedules::Status).string().not_null())
                    .col(
                        ColumnDef::new(ClassSchedules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSchedules::Table, ClassSchedules::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤记录表
        manager
            .create_table(
                Table::create()
                    .table(SessionAttendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionAttendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SessionAttendance::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionAttendance::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionAttendance::SessionDate)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SessionAttendance::Status).string().not_null())
                    .col(ColumnDef::new(SessionAttendance::Note).text().null())
                    .col(
                        ColumnDef::new(SessionAttendance::MarkedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionAttendance::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionAttendance::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SessionAttendance::Table, SessionAttendance::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SessionAttendance::Table, SessionAttendance::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级公告表
        manager
            .create_table(
                Table::create()
                    .table(ClassAnnouncements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassAnnouncements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassAnnouncements::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAnnouncements::AuthorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassAnnouncements::Title).string().not_null())
                    .col(
                        ColumnDef::new(ClassAnnouncements::Content)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAnnouncements::IsPinned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ClassAnnouncements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAnnouncements::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassAnnouncements::Table, ClassAnnouncements::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassAnnouncements::Table, ClassAnnouncements::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(ClassAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassAssignments::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAssignments::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassAssignments::Title).string().not_null())
                    .col(ColumnDef::new(ClassAssignments::Description).text().null())
                    .col(ColumnDef::new(ClassAssignments::Skill).string().not_null())
                    .col(ColumnDef::new(ClassAssignments::DueDate).big_integer().null())
                    .col(
                        ColumnDef::new(ClassAssignments::TotalPoints)
                            .double()
                            .not_null()
                            .default(10.0),
                    )
                    .col(ColumnDef::new(ClassAssignments::Status).string().not_null())
                    .col(
                        ColumnDef::new(ClassAssignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassAssignments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassAssignments::Table, ClassAssignments::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassAssignments::Table, ClassAssignments::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业提交表
        manager
            .create_table(
                Table::create()
                    .table(AssignmentSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Content)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Status)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssignmentSubmissions::Score).double().null())
                    .col(ColumnDef::new(AssignmentSubmissions::Feedback).text().null())
                    .col(
                        ColumnDef::new(AssignmentSubmissions::GradedBy)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::GradedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::WordCount)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                AssignmentSubmissions::Table,
                                AssignmentSubmissions::AssignmentId,
                            )
                            .to(ClassAssignments::Table, ClassAssignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                AssignmentSubmissions::Table,
                                AssignmentSubmissions::StudentId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Notifications::NotificationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::ActionUrl).string().null())
                    .col(
                        ColumnDef::new(Notifications::RelatedEntityType)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::RelatedEntityId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 用户表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // 班级表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_teacher_id")
                    .table(Classes::Table)
                    .col(Classes::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_status")
                    .table(Classes::Table)
                    .col(Classes::Status)
                    .to_owned(),
            )
            .await?;

        // 报名记录：同一班级同一学生至多一条记录，容量与重复校验依赖此约束
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_class_students_class_student")
                    .table(ClassStudents::Table)
                    .col(ClassStudents::ClassId)
                    .col(ClassStudents::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_students_student_id")
                    .table(ClassStudents::Table)
                    .col(ClassStudents::StudentId)
                    .to_owned(),
            )
            .await?;

        // 考勤：同一班级同一学生同一日期只有一条记录，批量点名按此约束执行更新插入
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_session_attendance_class_student_date")
                    .table(SessionAttendance::Table)
                    .col(SessionAttendance::ClassId)
                    .col(SessionAttendance::StudentId)
                    .col(SessionAttendance::SessionDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 提交：同一作业同一学生一份提交
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_assignment_submissions_assignment_student")
                    .table(AssignmentSubmissions::Table)
                    .col(AssignmentSubmissions::AssignmentId)
                    .col(AssignmentSubmissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignmentSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassAnnouncements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SessionAttendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassMaterials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    ProfileName,
    AvatarUrl,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    TeacherId,
    Name,
    Description,
    Level,
    StartDate,
    EndDate,
    MaxStudents,
    InviteCode,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassStudents {
    #[sea_orm(iden = "class_students")]
    Table,
    Id,
    ClassId,
    StudentId,
    Status,
    Progress,
    JoinedAt,
    RemovedAt,
    RemovedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassMaterials {
    #[sea_orm(iden = "class_materials")]
    Table,
    Id,
    ClassId,
    UploadedBy,
    Title,
    Description,
    MaterialType,
    FileUrl,
    FileName,
    FileSize,
    MimeType,
    DownloadCount,
    IsVisible,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassSchedules {
    #[sea_orm(iden = "class_schedules")]
    Table,
    Id,
    ClassId,
    Title,
    Description,
    Date,
    StartTime,
    EndTime,
    Location,
    ZoomLink,
    Notes,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SessionAttendance {
    #[sea_orm(iden = "session_attendance")]
    Table,
    Id,
    ClassId,
    StudentId,
    SessionDate,
    Status,
    Note,
    MarkedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassAnnouncements {
    #[sea_orm(iden = "class_announcements")]
    Table,
    Id,
    ClassId,
    AuthorId,
    Title,
    Content,
    IsPinned,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassAssignments {
    #[sea_orm(iden = "class_assignments")]
    Table,
    Id,
    ClassId,
    CreatedBy,
    Title,
    Description,
    Skill,
    DueDate,
    TotalPoints,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AssignmentSubmissions {
    #[sea_orm(iden = "assignment_submissions")]
    Table,
    Id,
    AssignmentId,
    StudentId,
    Content,
    Status,
    Score,
    Feedback,
    GradedBy,
    GradedAt,
    WordCount,
    SubmittedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    UserId,
    NotificationType,
    Title,
    Message,
    ActionUrl,
    RelatedEntityType,
    RelatedEntityId,
    IsRead,
    CreatedAt,
}
