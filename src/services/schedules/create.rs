use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ScheduleService;
use crate::models::{ApiResponse, schedules::requests::CreateScheduleRequest};
use crate::services::{access::ensure_class_manager, error_response};
use crate::utils::validate::{validate_date_string, validate_time_string};

pub async fn create_schedule(
    service: &ScheduleService,
    request: &HttpRequest,
    class_id: i64,
    schedule_data: CreateScheduleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    if schedule_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("Schedule title must not be empty")));
    }
    if let Err(msg) = validate_date_string(&schedule_data.date) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }
    for time in [&schedule_data.start_time, &schedule_data.end_time] {
        if let Err(msg) = validate_time_string(time) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
        }
    }
    if schedule_data.start_time >= schedule_data.end_time {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            "start_time must be earlier than end_time",
        )));
    }

    match storage.create_schedule(class_id, schedule_data).await {
        Ok(session) => {
            info!("Schedule {} created in class {}", session.id, class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                session,
                "Schedule created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
