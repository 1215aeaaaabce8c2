//! 课程安排与考勤存储操作

use super::SeaOrmStorage;
use crate::entity::class_schedules::{
    ActiveModel as ScheduleActiveModel, Column as ScheduleColumn, Entity as ClassSchedules,
};
use crate::entity::session_attendance::{
    ActiveModel as AttendanceActiveModel, Column as AttendanceColumn, Entity as SessionAttendance,
};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    schedules::{
        entities::{AttendanceRecord, ScheduleSession, ScheduleStatus},
        requests::{CreateScheduleRequest, MarkAttendanceRequest, ScheduleListQuery},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建课程安排
    pub async fn create_schedule_impl(
        &self,
        class_id: i64,
        req: CreateScheduleRequest,
    ) -> Result<ScheduleSession> {
        let now = chrono::Utc::now().timestamp();

        let model = ScheduleActiveModel {
            class_id: Set(class_id),
            title: Set(req.title),
            description: Set(req.description),
            date: Set(req.date),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            location: Set(req.location),
            zoom_link: Set(req.zoom_link),
            notes: Set(req.notes),
            status: Set(ScheduleStatus::Scheduled.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建课程安排失败: {e}")))?;

        Ok(result.into_session())
    }

    /// 分页列出课程安排，可按月份过滤（YYYY-MM）
    pub async fn list_schedules_impl(
        &self,
        class_id: i64,
        query: ScheduleListQuery,
    ) -> Result<PaginatedResponse<ScheduleSession>> {
        let page = query.page.max(1) as u64;
        let limit = query.limit.max(1) as u64;

        let mut select = ClassSchedules::find().filter(ScheduleColumn::ClassId.eq(class_id));

        // 日期存储为 YYYY-MM-DD，按月过滤即前缀匹配
        if let Some(ref month) = query.month {
            select = select.filter(ScheduleColumn::Date.starts_with(format!("{month}-")));
        }

        let paginator = select
            .order_by_asc(ScheduleColumn::Date)
            .order_by_asc(ScheduleColumn::StartTime)
            .paginate(&self.db, limit);

        let total = paginator.num_items().await.map_err(|e| {
            ClassroomError::database_operation(format!("查询课程安排总数失败: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            ClassroomError::database_operation(format!("查询课程安排页数失败: {e}"))
        })?;

        let schedules = paginator.fetch_page(page - 1).await.map_err(|e| {
            ClassroomError::database_operation(format!("查询课程安排列表失败: {e}"))
        })?;

        Ok(PaginatedResponse {
            items: schedules.into_iter().map(|m| m.into_session()).collect(),
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: limit as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 批量点名：按 (班级, 学生, 日期) 存在则更新，否则插入
    pub async fn mark_attendance_impl(
        &self,
        class_id: i64,
        marked_by: i64,
        request: MarkAttendanceRequest,
    ) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();
        let mut written = 0;

        for record in request.records {
            let existing = SessionAttendance::find()
                .filter(
                    Condition::all()
                        .add(AttendanceColumn::ClassId.eq(class_id))
                        .add(AttendanceColumn::StudentId.eq(record.student_id))
                        .add(AttendanceColumn::SessionDate.eq(request.session_date.clone())),
                )
                .one(&self.db)
                .await
                .map_err(|e| {
                    ClassroomError::database_operation(format!("查询考勤记录失败: {e}"))
                })?;

            match existing {
                Some(row) => {
                    let mut model: AttendanceActiveModel = row.into();
                    model.status = Set(record.status.to_string());
                    model.note = Set(record.note);
                    model.marked_by = Set(marked_by);
                    model.updated_at = Set(now);
                    model.update(&self.db).await.map_err(|e| {
                        ClassroomError::database_operation(format!("更新考勤记录失败: {e}"))
                    })?;
                }
                None => {
                    let model = AttendanceActiveModel {
                        class_id: Set(class_id),
                        student_id: Set(record.student_id),
                        session_date: Set(request.session_date.clone()),
                        status: Set(record.status.to_string()),
                        note: Set(record.note),
                        marked_by: Set(marked_by),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    model.insert(&self.db).await.map_err(|e| {
                        ClassroomError::database_operation(format!("创建考勤记录失败: {e}"))
                    })?;
                }
            }
            written += 1;
        }

        Ok(written)
    }

    /// 分页列出考勤记录，可按月份过滤
    pub async fn list_attendance_impl(
        &self,
        class_id: i64,
        query: ScheduleListQuery,
    ) -> Result<PaginatedResponse<AttendanceRecord>> {
        let page = query.page.max(1) as u64;
        let limit = query.limit.max(1) as u64;

        let mut select = SessionAttendance::find().filter(AttendanceColumn::ClassId.eq(class_id));

        if let Some(ref month) = query.month {
            select = select.filter(AttendanceColumn::SessionDate.starts_with(format!("{month}-")));
        }

        let paginator = select
            .order_by_desc(AttendanceColumn::SessionDate)
            .paginate(&self.db, limit);

        let total = paginator.num_items().await.map_err(|e| {
            ClassroomError::database_operation(format!("查询考勤记录总数失败: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            ClassroomError::database_operation(format!("查询考勤记录页数失败: {e}"))
        })?;

        let records = paginator.fetch_page(page - 1).await.map_err(|e| {
            ClassroomError::database_operation(format!("查询考勤记录列表失败: {e}"))
        })?;

        Ok(PaginatedResponse {
            items: records.into_iter().map(|m| m.into_attendance()).collect(),
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: limit as i64,
                total_pages: pages as i64,
            },
        })
    }
}
