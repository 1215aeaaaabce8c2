use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScheduleService;
use crate::models::{
    ApiResponse,
    common::pagination::MAX_PAGE_LIMIT,
    schedules::requests::{ScheduleListParams, ScheduleListQuery},
};
use crate::services::{access::ensure_class_member, error_response};
use crate::utils::validate::validate_month_string;

pub async fn list_schedules(
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

    match storage.list_schedules(class_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Schedules retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
