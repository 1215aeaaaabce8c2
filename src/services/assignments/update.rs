use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{ApiResponse, assignments::requests::UpdateAssignmentRequest};
use crate::services::{access::ensure_class_manager, error_response};

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    class_id: i64,
    assignment_id: i64,
    update_data: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    if update_data.total_points.is_some_and(|p| p <= 0.0) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("total_points must be positive")));
    }

    match storage
        .update_assignment(class_id, assignment_id, update_data)
        .await
    {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment updated successfully",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Assignment not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
