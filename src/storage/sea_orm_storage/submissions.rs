//! 作业提交存储操作

use super::SeaOrmStorage;
use super::classes::is_unique_violation;
use crate::entity::assignment_submissions::{ActiveModel, Column, Entity as AssignmentSubmissions};
use crate::entity::class_assignments::{Column as AssignmentColumn, Entity as ClassAssignments};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::{GradeSubmissionRequest, SubmissionListQuery, SubmitAssignmentRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 学生提交作业
    ///
    /// 同一 (作业, 学生) 只保留一份提交：未评分可覆盖重交，已评分拒绝。
    pub async fn submit_assignment_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        req: SubmitAssignmentRequest,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let existing = AssignmentSubmissions::find()
            .filter(
                Condition::all()
                    .add(Column::AssignmentId.eq(assignment_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询提交记录失败: {e}")))?;

        if let Some(record) = existing {
            let status = record
                .status
                .parse::<SubmissionStatus>()
                .unwrap_or(SubmissionStatus::Pending);
            if status == SubmissionStatus::Graded {
                return Err(ClassroomError::conflict(
                    "Submission has already been graded and cannot be resubmitted",
                ));
            }

            let mut model: ActiveModel = record.into();
            model.content = Set(req.content);
            model.word_count = Set(req.word_count);
            model.status = Set(SubmissionStatus::Pending.to_string());
            model.submitted_at = Set(now);
            model.updated_at = Set(now);

            let result = model
                .update(&self.db)
                .await
                .map_err(|e| ClassroomError::database_operation(format!("更新提交失败: {e}")))?;
            return Ok(result.into_submission());
        }

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            content: Set(req.content),
            status: Set(SubmissionStatus::Pending.to_string()),
            word_count: Set(req.word_count),
            submitted_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(result) => Ok(result.into_submission()),
            // 并发重复提交由唯一索引兜底
            Err(e) if is_unique_violation(&e) => Err(ClassroomError::conflict(
                "Submission already exists for this assignment",
            )),
            Err(e) => Err(ClassroomError::database_operation(format!(
                "创建提交失败: {e}"
            ))),
        }
    }

    /// 分页列出班级内的提交，可按状态/技能过滤
    pub async fn list_submissions_impl(
        &self,
        class_id: i64,
        query: SubmissionListQuery,
    ) -> Result<PaginatedResponse<Submission>> {
        let page = query.page.max(1) as u64;
        let limit = query.limit.max(1) as u64;

        let mut select = AssignmentSubmissions::find()
            .find_also_related(ClassAssignments)
            .filter(AssignmentColumn::ClassId.eq(class_id));

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }
        if let Some(skill) = query.skill {
            select = select.filter(AssignmentColumn::Skill.eq(skill.to_string()));
        }

        let paginator = select
            .order_by_desc(Column::SubmittedAt)
            .paginate(&self.db, limit);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询提交总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询提交页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: rows
                .into_iter()
                .map(|(submission, _)| submission.into_submission())
                .collect(),
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: limit as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 获取单个提交
    pub async fn get_submission_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        let result = AssignmentSubmissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 评分：pending/grading → graded
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        graded_by: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Submission> {
        let record = AssignmentSubmissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询提交失败: {e}")))?
            .ok_or_else(|| ClassroomError::not_found("Submission not found"))?;

        let status = record
            .status
            .parse::<SubmissionStatus>()
            .unwrap_or(SubmissionStatus::Pending);
        if !status.gradable() {
            return Err(ClassroomError::conflict(
                "Submission has already been graded",
            ));
        }

        let now = chrono::Utc::now().timestamp();

        let mut model: ActiveModel = record.into();
        model.score = Set(Some(grade.score));
        model.feedback = Set(grade.feedback);
        model.graded_by = Set(Some(graded_by));
        model.graded_at = Set(Some(now));
        model.status = Set(SubmissionStatus::Graded.to_string());
        model.updated_at = Set(now);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("评分失败: {e}")))?;

        Ok(result.into_submission())
    }
}
