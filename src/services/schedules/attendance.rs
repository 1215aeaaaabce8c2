use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ScheduleService;
use crate::models::{
    ApiResponse,
    common::pagination::MAX_PAGE_LIMIT,
    schedules::requests::{MarkAttendanceRequest, ScheduleListParams, ScheduleListQuery},
};
use crate::services::{access::authenticated_user_id, access::ensure_class_manager,
    access::ensure_class_member, error_response};
use crate::utils::validate::{validate_date_string, validate_month_string};

/// 批量点名：同一 (班级, 学生, 日期) 重复点名覆盖旧记录
pub async fn mark_attendance(
    service: &ScheduleService,
    request: &HttpRequest,
    class_id: i64,
    attendance_data: MarkAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = validate_date_string(&attendance_data.session_date) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }
    if attendance_data.records.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("records must not be empty")));
    }

    match storage
        .mark_attendance(class_id, uid, attendance_data)
        .await
    {
        Ok(written) => {
            info!("Attendance marked for class {}: {} records", class_id, written);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(written, "Attendance marked successfully")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn list_attendance(
    service: &ScheduleService,
    request: &HttpRequest,
    class_id: i64,
    params: ScheduleListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_member(&storage, request, class_id).await {
        return Ok(resp);
    }

    if let Some(ref month) = params.month
        && let Err(msg) = validate_month_string(month)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    let (page, limit) = params.pagination.clamped(MAX_PAGE_LIMIT);
    let query = ScheduleListQuery {
        page,
        limit,
        month: params.month,
    };

    match storage.list_attendance(class_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Attendance records retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
