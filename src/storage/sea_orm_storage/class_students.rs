//! 报名记录存储操作
//!
//! 容量、重复、状态前置校验与写入在同一事务中执行，
//! (class_id, student_id) 唯一索引兜底并发插入。

use super::SeaOrmStorage;
use super::classes::is_unique_violation;
use crate::entity::class_students::{ActiveModel, Column, Entity as ClassStudents};
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::users::Entity as Users;
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    class_students::{
        entities::{Enrollment, EnrollmentStatus},
        requests::{EnrollmentListQuery, UpdateEnrollmentRequest},
        responses::{BulkEnrollFailure, BulkEnrollResponse, EnrollmentWithStudent, StudentClassView},
    },
    classes::entities::ClassStatus,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseTransaction, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 教师添加学生
    pub async fn enroll_student_impl(&self, class_id: i64, student_id: i64) -> Result<Enrollment> {
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

        let enrollment = Self::enroll_into_class(&txn, &class, student_id).await?;

        txn.commit()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(enrollment)
    }

    /// 批量添加学生，逐项收集成败，单项失败不中断
    pub async fn bulk_enroll_impl(
        &self,
        class_id: i64,
        student_ids: &[i64],
    ) -> Result<BulkEnrollResponse> {
        let mut success = Vec::new();
        let mut failed = Vec::new();

        for &student_id in student_ids {
            match self.enroll_student_impl(class_id, student_id).await {
                Ok(_) => success.push(student_id),
                Err(e) => failed.push(BulkEnrollFailure {
                    student_id,
                    reason: e.message().to_string(),
                }),
            }
        }

        Ok(BulkEnrollResponse { success, failed })
    }

    /// 学生通过邀请码加入班级，仅 active 班级可加入
    pub async fn join_class_by_code_impl(
        &self,
        student_id: i64,
        invite_code: &str,
    ) -> Result<Enrollment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("开启事务失败: {e}")))?;

        let class = Classes::find()
            .filter(ClassColumn::InviteCode.eq(invite_code))
            .filter(ClassColumn::Status.eq(ClassStatus::Active.to_string()))
            .one(&txn)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?
            .ok_or_else(|| {
                ClassroomError::not_found("Invalid invite code or class is not active")
            })?;

        let enrollment = Self::enroll_into_class(&txn, &class, student_id).await?;

        txn.commit()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(enrollment)
    }

    /// 报名公共路径：容量检查、重复检查、dropped 重新激活、插入
    async fn enroll_into_class(
        txn: &DatabaseTransaction,
        class: &crate::entity::classes::Model,
        student_id: i64,
    ) -> Result<Enrollment> {
        let status = class
            .status
            .parse::<ClassStatus>()
            .unwrap_or(ClassStatus::Draft);
        if !status.accepts_enrollment() {
            return Err(ClassroomError::conflict(
                "Cannot enroll students to this class",
            ));
        }

        // 学生必须存在
        Users::find_by_id(student_id)
            .one(txn)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生失败: {e}")))?
            .ok_or_else(|| ClassroomError::not_found("Student not found"))?;

        // 已有记录：dropped 原地重新激活，其余视为重复报名
        let existing = ClassStudents::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class.id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(txn)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询报名记录失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        if let Some(record) = existing {
            let record_status = record
                .status
                .parse::<EnrollmentStatus>()
                .unwrap_or(EnrollmentStatus::Active);
            if record_status != EnrollmentStatus::Dropped {
                return Err(ClassroomError::conflict(
                    "Student is already enrolled in this class",
                ));
            }

            // 容量：active + inactive 计入
            Self::check_capacity(txn, class).await?;

            let mut model: ActiveModel = record.into();
            model.status = Set(EnrollmentStatus::Active.to_string());
            model.removed_at = Set(None);
            model.removed_by = Set(None);
            model.updated_at = Set(now);

            let result = model.update(txn).await.map_err(|e| {
                ClassroomError::database_operation(format!("重新激活报名失败: {e}"))
            })?;
            return Ok(result.into_enrollment());
        }

        Self::check_capacity(txn, class).await?;

        let model = ActiveModel {
            class_id: Set(class.id),
            student_id: Set(student_id),
            status: Set(EnrollmentStatus::Active.to_string()),
            progress: Set(0.0),
            joined_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(txn).await {
            Ok(result) => Ok(result.into_enrollment()),
            // 唯一索引兜底：并发插入同一 (class, student) 时按重复报名处理
            Err(e) if is_unique_violation(&e) => Err(ClassroomError::conflict(
                "Student is already enrolled in this class",
            )),
            Err(e) => Err(ClassroomError::database_operation(format!(
                "创建报名记录失败: {e}"
            ))),
        }
    }

    async fn check_capacity(
        txn: &DatabaseTransaction,
        class: &crate::entity::classes::Model,
    ) -> Result<()> {
        let occupied = ClassStudents::find()
            .filter(Column::ClassId.eq(class.id))
            .filter(
                Column::Status.is_in([
                    EnrollmentStatus::Active.to_string(),
                    EnrollmentStatus::Inactive.to_string(),
                ]),
            )
            .count(txn)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("统计班级容量失败: {e}")))?;

        if occupied >= class.max_students as u64 {
            return Err(ClassroomError::conflict("Class is full"));
        }
        Ok(())
    }

    /// 获取报名记录
    pub async fn get_enrollment_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = ClassStudents::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询报名记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 退课：状态迁移到 dropped，保留记录
    pub async fn drop_enrollment_impl(
        &self,
        class_id: i64,
        student_id: i64,
        removed_by: Option<i64>,
    ) -> Result<Enrollment> {
        let record = ClassStudents::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询报名记录失败: {e}")))?
            .ok_or_else(|| ClassroomError::not_found("Student is not enrolled in this class"))?;

        let now = chrono::Utc::now().timestamp();

        let mut model: ActiveModel = record.into();
        model.status = Set(EnrollmentStatus::Dropped.to_string());
        model.removed_at = Set(Some(now));
        model.removed_by = Set(removed_by);
        model.updated_at = Set(now);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("退课失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 人工修正报名状态/进度
    pub async fn update_enrollment_impl(
        &self,
        class_id: i64,
        student_id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        let Some(record) = ClassStudents::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询报名记录失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = record.into();
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(progress) = update.progress {
            model.progress = Set(progress);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新报名记录失败: {e}")))?;

        Ok(Some(result.into_enrollment()))
    }

    /// 分页列出班级学生（带学生概要）
    pub async fn list_class_students_impl(
        &self,
        class_id: i64,
        query: EnrollmentListQuery,
    ) -> Result<PaginatedResponse<EnrollmentWithStudent>> {
        let page = query.page.max(1) as u64;
        let limit = query.limit.max(1) as u64;

        let mut select = ClassStudents::find().filter(Column::ClassId.eq(class_id));

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let paginator = select
            .order_by_desc(Column::JoinedAt)
            .find_also_related(Users)
            .paginate(&self.db, limit);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生列表失败: {e}")))?;

        let items = rows
            .into_iter()
            .map(|(enrollment, student)| {
                let (student_name, student_email) = student
                    .map(|s| {
                        (
                            s.profile_name.clone().unwrap_or_else(|| s.username.clone()),
                            s.email,
                        )
                    })
                    .unwrap_or_default();
                EnrollmentWithStudent {
                    enrollment: enrollment.into_enrollment(),
                    student_name,
                    student_email,
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

    /// 分页列出学生所在的班级（仅 active 报名）
    pub async fn list_student_classes_impl(
        &self,
        student_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<PaginatedResponse<StudentClassView>> {
        let page = page.max(1) as u64;
        let limit = limit.max(1) as u64;

        let paginator = ClassStudents::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Status.eq(EnrollmentStatus::Active.to_string()))
            .order_by_desc(Column::JoinedAt)
            .find_also_related(Classes)
            .paginate(&self.db, limit);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级列表失败: {e}")))?;

        let items = rows
            .into_iter()
            .filter_map(|(enrollment, class)| {
                class.map(|c| StudentClassView {
                    class: c.into_class(),
                    enrollment: enrollment.into_enrollment(),
                })
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

    /// 班级内 active 学生的用户 ID 列表
    pub async fn list_active_student_ids_impl(&self, class_id: i64) -> Result<Vec<i64>> {
        use sea_orm::QuerySelect;

        let ids: Vec<i64> = ClassStudents::find()
            .select_only()
            .column(Column::StudentId)
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::Status.eq(EnrollmentStatus::Active.to_string()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级学生失败: {e}")))?;

        Ok(ids)
    }
}
