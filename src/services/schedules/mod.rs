pub mod attendance;
pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::schedules::requests::{
    CreateScheduleRequest, MarkAttendanceRequest, ScheduleListParams,
};
use crate::storage::Storage;

pub struct ScheduleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScheduleService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_schedule(
        &self,
        req: &HttpRequest,
        class_id: i64,
        schedule_data: CreateScheduleRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_schedule(self, req, class_id, schedule_data).await
    }

    // 列出课程安排，可按月份过滤
    pub async fn list_schedules(
        &self,
        req: &HttpRequest,
        class_id: i64,
        params: ScheduleListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_schedules(self, req, class_id, params).await
    }

    // 批量点名
    pub async fn mark_attendance(
        &self,
        req: &HttpRequest,
        class_id: i64,
        attendance_data: MarkAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        attendance::mark_attendance(self, req, class_id, attendance_data).await
    }

    // 列出考勤记录，可按月份过滤
    pub async fn list_attendance(
        &self,
        req: &HttpRequest,
        class_id: i64,
        params: ScheduleListParams,
    ) -> ActixResult<HttpResponse> {
        attendance::list_attendance(self, req, class_id, params).await
    }
}
