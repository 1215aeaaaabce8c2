use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassStudentService;
use crate::models::{ApiResponse, class_students::requests::UpdateEnrollmentRequest};
use crate::services::{access::ensure_class_manager, error_response};

/// 教师人工修正报名状态/进度，不走状态机
pub async fn update_enrollment(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
    student_id: i64,
    update_data: UpdateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    if update_data
        .progress
        .is_some_and(|p| !(0.0..=100.0).contains(&p))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("progress must be between 0 and 100")));
    }

    match storage
        .update_enrollment(class_id, student_id, update_data)
        .await
    {
        Ok(Some(enrollment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollment,
            "Enrollment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            "Student is not enrolled in this class",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
