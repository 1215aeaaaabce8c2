use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段传入的是已经哈希过的密码）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedResponse<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量（用于启动时的管理员种子）
    async fn count_users(&self) -> Result<i64>;

    /// 班级管理方法
    // 创建班级，邀请码冲突时自动重新生成
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过邀请码获取 active 状态的班级，draft/completed/archived 不可通过邀请码访问
    async fn get_active_class_by_code(&self, invite_code: &str) -> Result<Option<Class>>;
    // 列出班级（带活跃学生数）
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<PaginatedResponse<ClassWithStudentCount>>;
    // 更新班级信息，状态只接受合法迁移
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级，存在活跃报名时拒绝
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    // 激活班级（仅 draft）
    async fn activate_class(&self, class_id: i64) -> Result<Class>;
    // 完成班级（仅 active），并将所有 active 报名级联为 completed
    async fn complete_class(&self, class_id: i64) -> Result<Class>;
    // 重新生成邀请码
    async fn regenerate_invite_code(&self, class_id: i64) -> Result<String>;
    // 指派教师
    async fn assign_teacher(&self, class_id: i64, teacher_id: i64) -> Result<Option<Class>>;
    // 统计活跃学生数量
    async fn count_active_students(&self, class_id: i64) -> Result<i64>;
    // 班级统计
    async fn class_stats(&self, class_id: i64) -> Result<Option<ClassStatsResponse>>;
    // 管理端总览报告
    async fn overview_report(&self) -> Result<OverviewReport>;

    /// 报名管理方法
    // 报名单个学生：容量、重复、状态校验在同一事务中完成，
    // dropped 记录会被原地重新激活而不是新建
    async fn enroll_student(&self, class_id: i64, student_id: i64) -> Result<Enrollment>;
    // 批量报名：逐个执行，整体不因单个失败中断
    async fn bulk_enroll(
        &self,
        class_id: i64,
        student_ids: &[i64],
    ) -> Result<BulkEnrollResponse>;
    // 学生通过邀请码加入 active 班级
    async fn join_class_by_code(&self, student_id: i64, invite_code: &str) -> Result<Enrollment>;
    // 获取报名记录
    async fn get_enrollment(&self, class_id: i64, student_id: i64) -> Result<Option<Enrollment>>;
    // 退课：状态迁移到 dropped，记录操作者，不删除行
    async fn drop_enrollment(
        &self,
        class_id: i64,
        student_id: i64,
        removed_by: Option<i64>,
    ) -> Result<Enrollment>;
    // 人工修正报名状态/进度
    async fn update_enrollment(
        &self,
        class_id: i64,
        student_id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>>;
    // 列出班级学生
    async fn list_class_students(
        &self,
        class_id: i64,
        query: EnrollmentListQuery,
    ) -> Result<PaginatedResponse<EnrollmentWithStudent>>;
    // 列出学生的班级（仅 active 报名）
    async fn list_student_classes(
        &self,
        student_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<PaginatedResponse<StudentClassView>>;

    /// 资料管理方法
    async fn create_material(
        &self,
        class_id: i64,
        uploaded_by: i64,
        material: CreateMaterialRequest,
    ) -> Result<Material>;
    async fn list_materials(
        &self,
        class_id: i64,
        query: MaterialListQuery,
    ) -> Result<PaginatedResponse<Material>>;
    async fn get_material(&self, class_id: i64, material_id: i64) -> Result<Option<Material>>;
    async fn update_material(
        &self,
        class_id: i64,
        material_id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>>;
    async fn delete_material(&self, class_id: i64, material_id: i64) -> Result<bool>;
    // 下载计数 +1 并返回最新记录
    async fn record_material_download(
        &self,
        class_id: i64,
        material_id: i64,
    ) -> Result<Option<Material>>;

    /// 课程安排与考勤方法
    async fn create_schedule(
        &self,
        class_id: i64,
        schedule: CreateScheduleRequest,
    ) -> Result<ScheduleSession>;
    async fn list_schedules(
        &self,
        class_id: i64,
        query: ScheduleListQuery,
    ) -> Result<PaginatedResponse<ScheduleSession>>;
    // 批量点名，按 (班级, 学生, 日期) 更新插入，返回写入条数
    async fn mark_attendance(
        &self,
        class_id: i64,
        marked_by: i64,
        request: MarkAttendanceRequest,
    ) -> Result<i64>;
    async fn list_attendance(
        &self,
        class_id: i64,
        query: ScheduleListQuery,
    ) -> Result<PaginatedResponse<AttendanceRecord>>;

    /// 公告管理方法
    async fn create_announcement(
        &self,
        class_id: i64,
        author_id: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    // 置顶在前
    async fn list_announcements(
        &self,
        class_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<PaginatedResponse<Announcement>>;
    async fn get_announcement(
        &self,
        class_id: i64,
        announcement_id: i64,
    ) -> Result<Option<Announcement>>;
    async fn update_announcement(
        &self,
        class_id: i64,
        announcement_id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>>;
    async fn delete_announcement(&self, class_id: i64, announcement_id: i64) -> Result<bool>;
    // 班级内 active 学生的 ID 列表（公告通知用）
    async fn list_active_student_ids(&self, class_id: i64) -> Result<Vec<i64>>;

    /// 作业管理方法
    async fn create_assignment(
        &self,
        class_id: i64,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn list_assignments(
        &self,
        class_id: i64,
        query: AssignmentListQuery,
    ) -> Result<PaginatedResponse<Assignment>>;
    async fn get_assignment(
        &self,
        class_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Assignment>>;
    async fn update_assignment(
        &self,
        class_id: i64,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, class_id: i64, assignment_id: i64) -> Result<bool>;

    /// 提交管理方法
    // 学生提交，重复提交覆盖未评分的旧内容
    async fn submit_assignment(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission: SubmitAssignmentRequest,
    ) -> Result<Submission>;
    async fn list_submissions(
        &self,
        class_id: i64,
        query: SubmissionListQuery,
    ) -> Result<PaginatedResponse<Submission>>;
    async fn get_submission(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 评分：pending/grading → graded
    async fn grade_submission(
        &self,
        submission_id: i64,
        graded_by: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Submission>;

    /// 通知方法
    // 批量写入通知行，投递由外部系统负责
    async fn create_bulk_notifications(&self, request: BulkNotificationRequest) -> Result<i64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
