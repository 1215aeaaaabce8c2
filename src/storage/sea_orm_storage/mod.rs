//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod assignments;
mod class_students;
mod classes;
mod materials;
mod notifications;
mod schedules;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{ClassroomError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 直接按 URL 连接并迁移，不读全局配置（集成测试用）
    pub async fn new_with_url(url: &str) -> Result<Self> {
        let db = Database::connect(url)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("无法连接到数据库: {e}")))?;

        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassroomError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassroomError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginatedResponse,
    announcements::{
        entities::Announcement,
        requests::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
    },
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    class_students::{
        entities::Enrollment,
        requests::{EnrollmentListQuery, UpdateEnrollmentRequest},
        responses::{BulkEnrollResponse, EnrollmentWithStudent, StudentClassView},
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::{ClassStatsResponse, ClassWithStudentCount},
    },
    materials::{
        entities::Material,
        requests::{CreateMaterialRequest, MaterialListQuery, UpdateMaterialRequest},
    },
    notifications::entities::BulkNotificationRequest,
    reports::responses::OverviewReport,
    schedules::{
        entities::{AttendanceRecord, ScheduleSession},
        requests::{CreateScheduleRequest, MarkAttendanceRequest, ScheduleListQuery},
    },
    submissions::{
        entities::Submission,
        requests::{GradeSubmissionRequest, SubmissionListQuery, SubmitAssignmentRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedResponse<User>> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<i64> {
        self.count_users_impl().await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_active_class_by_code(&self, invite_code: &str) -> Result<Option<Class>> {
        self.get_active_class_by_code_impl(invite_code).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<PaginatedResponse<ClassWithStudentCount>> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    async fn activate_class(&self, class_id: i64) -> Result<Class> {
        self.activate_class_impl(class_id).await
    }

    async fn complete_class(&self, class_id: i64) -> Result<Class> {
        self.complete_class_impl(class_id).await
    }

    async fn regenerate_invite_code(&self, class_id: i64) -> Result<String> {
        self.regenerate_invite_code_impl(class_id).await
    }

    async fn assign_teacher(&self, class_id: i64, teacher_id: i64) -> Result<Option<Class>> {
        self.assign_teacher_impl(class_id, teacher_id).await
    }

    async fn count_active_students(&self, class_id: i64) -> Result<i64> {
        self.count_active_students_impl(class_id).await
    }

    async fn class_stats(&self, class_id: i64) -> Result<Option<ClassStatsResponse>> {
        self.class_stats_impl(class_id).await
    }

    async fn overview_report(&self) -> Result<OverviewReport> {
        self.overview_report_impl().await
    }

    // 报名模块
    async fn enroll_student(&self, class_id: i64, student_id: i64) -> Result<Enrollment> {
        self.enroll_student_impl(class_id, student_id).await
    }

    async fn bulk_enroll(
        &self,
        class_id: i64,
        student_ids: &[i64],
    ) -> Result<BulkEnrollResponse> {
        self.bulk_enroll_impl(class_id, student_ids).await
    }

    async fn join_class_by_code(&self, student_id: i64, invite_code: &str) -> Result<Enrollment> {
        self.join_class_by_code_impl(student_id, invite_code).await
    }

    async fn get_enrollment(&self, class_id: i64, student_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(class_id, student_id).await
    }

    async fn drop_enrollment(
        &self,
        class_id: i64,
        student_id: i64,
        removed_by: Option<i64>,
    ) -> Result<Enrollment> {
        self.drop_enrollment_impl(class_id, student_id, removed_by)
            .await
    }

    async fn update_enrollment(
        &self,
        class_id: i64,
        student_id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_impl(class_id, student_id, update)
            .await
    }

    async fn list_class_students(
        &self,
        class_id: i64,
        query: EnrollmentListQuery,
    ) -> Result<PaginatedResponse<EnrollmentWithStudent>> {
        self.list_class_students_impl(class_id, query).await
    }

    async fn list_student_classes(
        &self,
        student_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<PaginatedResponse<StudentClassView>> {
        self.list_student_classes_impl(student_id, page, limit)
            .await
    }

    // 资料模块
    async fn create_material(
        &self,
        class_id: i64,
        uploaded_by: i64,
        material: CreateMaterialRequest,
    ) -> Result<Material> {
        self.create_material_impl(class_id, uploaded_by, material)
            .await
    }

    async fn list_materials(
        &self,
        class_id: i64,
        query: MaterialListQuery,
    ) -> Result<PaginatedResponse<Material>> {
        self.list_materials_impl(class_id, query).await
    }

    async fn get_material(&self, class_id: i64, material_id: i64) -> Result<Option<Material>> {
        self.get_material_impl(class_id, material_id).await
    }

    async fn update_material(
        &self,
        class_id: i64,
        material_id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>> {
        self.update_material_impl(class_id, material_id, update)
            .await
    }

    async fn delete_material(&self, class_id: i64, material_id: i64) -> Result<bool> {
        self.delete_material_impl(class_id, material_id).await
    }

    async fn record_material_download(
        &self,
        class_id: i64,
        material_id: i64,
    ) -> Result<Option<Material>> {
        self.record_material_download_impl(class_id, material_id)
            .await
    }

    // 课程安排与考勤模块
    async fn create_schedule(
        &self,
        class_id: i64,
        schedule: CreateScheduleRequest,
    ) -> Result<ScheduleSession> {
        self.create_schedule_impl(class_id, schedule).await
    }

    async fn list_schedules(
        &self,
        class_id: i64,
        query: ScheduleListQuery,
    ) -> Result<PaginatedResponse<ScheduleSession>> {
        self.list_schedules_impl(class_id, query).await
    }

    async fn mark_attendance(
        &self,
        class_id: i64,
        marked_by: i64,
        request: MarkAttendanceRequest,
    ) -> Result<i64> {
        self.mark_attendance_impl(class_id, marked_by, request)
            .await
    }

    async fn list_attendance(
        &self,
        class_id: i64,
        query: ScheduleListQuery,
    ) -> Result<PaginatedResponse<AttendanceRecord>> {
        self.list_attendance_impl(class_id, query).await
    }

    // 公告模块
    async fn create_announcement(
        &self,
        class_id: i64,
        author_id: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        self.create_announcement_impl(class_id, author_id, announcement)
            .await
    }

    async fn list_announcements(
        &self,
        class_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<PaginatedResponse<Announcement>> {
        self.list_announcements_impl(class_id, page, limit).await
    }

    async fn get_announcement(
        &self,
        class_id: i64,
        announcement_id: i64,
    ) -> Result<Option<Announcement>> {
        self.get_announcement_impl(class_id, announcement_id).await
    }

    async fn update_announcement(
        &self,
        class_id: i64,
        announcement_id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        self.update_announcement_impl(class_id, announcement_id, update)
            .await
    }

    async fn delete_announcement(&self, class_id: i64, announcement_id: i64) -> Result<bool> {
        self.delete_announcement_impl(class_id, announcement_id)
            .await
    }

    async fn list_active_student_ids(&self, class_id: i64) -> Result<Vec<i64>> {
        self.list_active_student_ids_impl(class_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        class_id: i64,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(class_id, created_by, assignment)
            .await
    }

    async fn list_assignments(
        &self,
        class_id: i64,
        query: AssignmentListQuery,
    ) -> Result<PaginatedResponse<Assignment>> {
        self.list_assignments_impl(class_id, query).await
    }

    async fn get_assignment(
        &self,
        class_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        self.get_assignment_impl(class_id, assignment_id).await
    }

    async fn update_assignment(
        &self,
        class_id: i64,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(class_id, assignment_id, update)
            .await
    }

    async fn delete_assignment(&self, class_id: i64, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(class_id, assignment_id).await
    }

    // 提交模块
    async fn submit_assignment(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission: SubmitAssignmentRequest,
    ) -> Result<Submission> {
        self.submit_assignment_impl(assignment_id, student_id, submission)
            .await
    }

    async fn list_submissions(
        &self,
        class_id: i64,
        query: SubmissionListQuery,
    ) -> Result<PaginatedResponse<Submission>> {
        self.list_submissions_impl(class_id, query).await
    }

    async fn get_submission(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_impl(submission_id).await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        graded_by: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Submission> {
        self.grade_submission_impl(submission_id, graded_by, grade)
            .await
    }

    // 通知模块
    async fn create_bulk_notifications(&self, request: BulkNotificationRequest) -> Result<i64> {
        self.create_bulk_notifications_impl(request).await
    }
}
