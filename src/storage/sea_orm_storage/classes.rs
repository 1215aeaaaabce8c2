//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::class_materials::Entity as ClassMaterials;
use crate::entity::class_students::{
    Column as EnrollmentColumn, Entity as ClassStudents,
};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    class_students::entities::EnrollmentStatus,
    classes::{
        entities::{Class, ClassStatus, VstepLevel},
        requests::{ClassListQuery, ClassSortBy, CreateClassRequest, SortOrder, UpdateClassRequest},
        responses::{ClassStatsResponse, ClassWithStudentCount, EnrollmentBreakdown},
    },
    reports::responses::{LevelCount, OverviewReport},
};
use crate::utils::{escape_like_pattern, random_code::generate_invite_code};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use tracing::warn;

/// 邀请码冲突时的最大重试次数
const MAX_INVITE_CODE_ATTEMPTS: usize = 5;

/// 判断数据库错误是否为唯一约束冲突
pub(crate) fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}

impl SeaOrmStorage {
    /// 创建班级
    ///
    /// 邀请码直接插入，依赖唯一索引检测冲突，冲突则换码重试。
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        // teacher_id 必须由服务层确保已设置
        let teacher_id = req.teacher_id.ok_or_else(|| {
            ClassroomError::database_operation("teacher_id must be set before calling create_class")
        })?;

        for _ in 0..MAX_INVITE_CODE_ATTEMPTS {
            let invite_code = generate_invite_code();

            let model = ActiveModel {
                teacher_id: Set(teacher_id),
                name: Set(req.name.clone()),
                description: Set(req.description.clone()),
                level: Set(req.level.unwrap_or(VstepLevel::B1).to_string()),
                start_date: Set(req.start_date.clone()),
                end_date: Set(req.end_date.clone()),
                max_students: Set(req.max_students.unwrap_or(30)),
                invite_code: Set(invite_code),
                // 新班级统一从 draft 开始
                status: Set(ClassStatus::Draft.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            match model.insert(&self.db).await {
                Ok(result) => return Ok(result.into_class()),
                Err(e) if is_unique_violation(&e) => {
                    warn!("Invite code collision on class creation, regenerating");
                    continue;
                }
                Err(e) => {
                    return Err(ClassroomError::database_operation(format!(
                        "创建班级失败: {e}"
                    )));
                }
            }
        }

        Err(ClassroomError::conflict(
            "Failed to generate a unique invite code, please retry",
        ))
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 通过邀请码获取 active 班级
    pub async fn get_active_class_by_code_impl(&self, invite_code: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::InviteCode.eq(invite_code))
            .filter(Column::Status.eq(ClassStatus::Active.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 分页列出班级（带活跃学生数）
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<PaginatedResponse<ClassWithStudentCount>> {
        let page = query.page.max(1) as u64;
        let limit = query.limit.max(1) as u64;

        let mut select = Classes::find();

        // 教师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 状态/等级筛选
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }
        if let Some(level) = query.level {
            select = select.filter(Column::Level.eq(level.to_string()));
        }

        // 搜索条件：名称或邀请码
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            use sea_orm::ExprTrait;
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Column::Name
                    .contains(&escaped)
                    .or(Column::InviteCode.contains(&escaped)),
            );
        }

        // 排序
        let sort_by = query.sort_by.unwrap_or(ClassSortBy::CreatedAt);
        let sort_column = match sort_by {
            ClassSortBy::CreatedAt => Column::CreatedAt,
            ClassSortBy::Name => Column::Name,
            ClassSortBy::Level => Column::Level,
            ClassSortBy::Status => Column::Status,
            ClassSortBy::StartDate => Column::StartDate,
        };
        select = match query.sort_order.unwrap_or(SortOrder::Desc) {
            SortOrder::Asc => select.order_by_asc(sort_column),
            SortOrder::Desc => select.order_by_desc(sort_column),
        };

        // 分页查询
        let paginator = select.paginate(&self.db, limit);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级页数失败: {e}")))?;

        let classes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级列表失败: {e}")))?;

        // 活跃学生数：一次分组统计，避免逐班查询
        let class_ids: Vec<i64> = classes.iter().map(|c| c.id).collect();
        let counts: HashMap<i64, i64> = if class_ids.is_empty() {
            HashMap::new()
        } else {
            ClassStudents::find()
                .select_only()
                .column(EnrollmentColumn::ClassId)
                .column_as(EnrollmentColumn::Id.count(), "count")
                .filter(EnrollmentColumn::ClassId.is_in(class_ids))
                .filter(EnrollmentColumn::Status.eq(EnrollmentStatus::Active.to_string()))
                .group_by(EnrollmentColumn::ClassId)
                .into_tuple::<(i64, i64)>()
                .all(&self.db)
                .await
                .map_err(|e| {
                    ClassroomError::database_operation(format!("统计班级学生数失败: {e}"))
                })?
                .into_iter()
                .collect()
        };

        let items = classes
            .into_iter()
            .map(|m| {
                let student_count = counts.get(&m.id).copied().unwrap_or(0);
                ClassWithStudentCount {
                    class: m.into_class(),
                    student_count,
                }
            })
            .collect();

        Ok(PaginatedResponse {
            items,
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: limit as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级信息
    ///
    /// status 字段只接受状态机允许的迁移。
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let Some(existing) = self.get_class_by_id_impl(class_id).await? else {
            return Ok(None);
        };

        if let Some(next_status) = update.status
            && next_status != existing.status
            && !existing.status.can_transition_to(next_status)
        {
            return Err(ClassroomError::conflict(format!(
                "Cannot change class status from {} to {}",
                existing.status, next_status
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(level) = update.level {
            model.level = Set(level.to_string());
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(Some(start_date));
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(Some(end_date));
        }
        if let Some(max_students) = update.max_students {
            model.max_students = Set(max_students);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级
    ///
    /// 存在活跃报名时拒绝删除，要求先完成班级或移除学生。
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let active = self.count_active_students_impl(class_id).await?;
        if active > 0 {
            return Err(ClassroomError::conflict(format!(
                "Cannot delete class with {active} active students. Please complete the class or remove the students first."
            )));
        }

        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 激活班级（draft → active）
    pub async fn activate_class_impl(&self, class_id: i64) -> Result<Class> {
        let class = self
            .get_class_by_id_impl(class_id)
            .await?
            .ok_or_else(|| ClassroomError::not_found("Class not found"))?;

        if class.status != ClassStatus::Draft {
            return Err(ClassroomError::conflict(
                "Only draft classes can be activated",
            ));
        }

        let model = ActiveModel {
            id: Set(class_id),
            status: Set(ClassStatus::Active.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("激活班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 完成班级（active → completed）
    ///
    /// 班级状态与报名级联在同一事务中提交。
    pub async fn complete_class_impl(&self, class_id: i64) -> Result<Class> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("开启事务失败: {e}")))?;

        let class = Classes::find_by_id(class_id)
            .one(&txn)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?
            .ok_or_else(|| ClassroomError::not_found("Class not found"))?;

        if class.status != ClassStatus::Active.to_string() {
            return Err(ClassroomError::conflict(
                "Only active classes can be completed",
            ));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(class_id),
            status: Set(ClassStatus::Completed.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };
        let updated = model
            .update(&txn)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("完成班级失败: {e}")))?;

        // 级联：active 报名全部转为 completed
        ClassStudents::update_many()
            .col_expr(
                EnrollmentColumn::Status,
                Expr::value(EnrollmentStatus::Completed.to_string()),
            )
            .col_expr(EnrollmentColumn::UpdatedAt, Expr::value(now))
            .filter(EnrollmentColumn::ClassId.eq(class_id))
            .filter(EnrollmentColumn::Status.eq(EnrollmentStatus::Active.to_string()))
            .exec(&txn)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("级联完成报名失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated.into_class())
    }

    /// 重新生成邀请码
    pub async fn regenerate_invite_code_impl(&self, class_id: i64) -> Result<String> {
        self.get_class_by_id_impl(class_id)
            .await?
            .ok_or_else(|| ClassroomError::not_found("Class not found"))?;

        for _ in 0..MAX_INVITE_CODE_ATTEMPTS {
            let invite_code = generate_invite_code();

            let model = ActiveModel {
                id: Set(class_id),
                invite_code: Set(invite_code.clone()),
                updated_at: Set(chrono::Utc::now().timestamp()),
                ..Default::default()
            };

            match model.update(&self.db).await {
                Ok(_) => return Ok(invite_code),
                Err(e) if is_unique_violation(&e) => {
                    warn!("Invite code collision on regeneration, retrying");
                    continue;
                }
                Err(e) => {
                    return Err(ClassroomError::database_operation(format!(
                        "更新邀请码失败: {e}"
                    )));
                }
            }
        }

        Err(ClassroomError::conflict(
            "Failed to generate a unique invite code, please retry",
        ))
    }

    /// 指派教师
    pub async fn assign_teacher_impl(
        &self,
        class_id: i64,
        teacher_id: i64,
    ) -> Result<Option<Class>> {
        let Some(_) = self.get_class_by_id_impl(class_id).await? else {
            return Ok(None);
        };

        let model = ActiveModel {
            id: Set(class_id),
            teacher_id: Set(teacher_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("指派教师失败: {e}")))?;

        Ok(Some(result.into_class()))
    }

    /// 统计活跃学生数量
    pub async fn count_active_students_impl(&self, class_id: i64) -> Result<i64> {
        let count = ClassStudents::find()
            .filter(EnrollmentColumn::ClassId.eq(class_id))
            .filter(EnrollmentColumn::Status.eq(EnrollmentStatus::Active.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计班级学生数失败: {e}")))?;

        Ok(count as i64)
    }

    /// 班级统计：按状态分组的学生数、资料数、平均进度
    pub async fn class_stats_impl(&self, class_id: i64) -> Result<Option<ClassStatsResponse>> {
        let Some(class) = self.get_class_by_id_impl(class_id).await? else {
            return Ok(None);
        };

        let status_counts: Vec<(String, i64)> = ClassStudents::find()
            .select_only()
            .column(EnrollmentColumn::Status)
            .column_as(EnrollmentColumn::Id.count(), "count")
            .filter(EnrollmentColumn::ClassId.eq(class_id))
            .group_by(EnrollmentColumn::Status)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计报名状态失败: {e}")))?;

        let mut students = EnrollmentBreakdown::default();
        for (status, count) in status_counts {
            match status.parse::<EnrollmentStatus>() {
                Ok(EnrollmentStatus::Active) => students.active = count,
                Ok(EnrollmentStatus::Inactive) => students.inactive = count,
                Ok(EnrollmentStatus::Completed) => students.completed = count,
                Ok(EnrollmentStatus::Dropped) => students.dropped = count,
                Err(_) => warn!("Unknown enrollment status in database: {status}"),
            }
        }
        students.total =
            students.active + students.inactive + students.completed + students.dropped;

        // 平均进度：active 报名的 progress 均值，保留一位小数
        let progresses: Vec<f64> = ClassStudents::find()
            .select_only()
            .column(EnrollmentColumn::Progress)
            .filter(EnrollmentColumn::ClassId.eq(class_id))
            .filter(EnrollmentColumn::Status.eq(EnrollmentStatus::Active.to_string()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学习进度失败: {e}")))?;

        let average_progress = if progresses.is_empty() {
            0.0
        } else {
            let avg = progresses.iter().sum::<f64>() / progresses.len() as f64;
            (avg * 10.0).round() / 10.0
        };

        let materials_count = ClassMaterials::find()
            .filter(crate::entity::class_materials::Column::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计资料数量失败: {e}")))?
            as i64;

        Ok(Some(ClassStatsResponse {
            class_id,
            name: class.name,
            level: class.level,
            status: class.status,
            max_students: class.max_students,
            students,
            materials_count,
            average_progress,
            // 对外口径与 average_progress 一致
            completion_rate: average_progress,
        }))
    }

    /// 管理端总览报告
    pub async fn overview_report_impl(&self) -> Result<OverviewReport> {
        let status_counts: Vec<(String, i64)> = Classes::find()
            .select_only()
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Status)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计班级状态失败: {e}")))?;

        let mut report = OverviewReport {
            total_classes: 0,
            draft_classes: 0,
            active_classes: 0,
            completed_classes: 0,
            archived_classes: 0,
            total_enrollments: 0,
            level_distribution: vec![],
        };

        for (status, count) in status_counts {
            report.total_classes += count;
            match status.parse::<ClassStatus>() {
                Ok(ClassStatus::Draft) => report.draft_classes = count,
                Ok(ClassStatus::Active) => report.active_classes = count,
                Ok(ClassStatus::Completed) => report.completed_classes = count,
                Ok(ClassStatus::Archived) => report.archived_classes = count,
                Err(_) => warn!("Unknown class status in database: {status}"),
            }
        }

        report.total_enrollments = ClassStudents::find()
            .filter(EnrollmentColumn::Status.eq(EnrollmentStatus::Active.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计报名总数失败: {e}")))?
            as i64;

        let level_counts: Vec<(String, i64)> = Classes::find()
            .select_only()
            .column(Column::Level)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Level)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计班级等级失败: {e}")))?;

        report.level_distribution = level_counts
            .into_iter()
            .map(|(level, count)| LevelCount { level, count })
            .collect();

        Ok(report)
    }
}
