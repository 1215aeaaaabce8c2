use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::{ApiResponse, assignments::requests::CreateAssignmentRequest};
use crate::services::{access::authenticated_user_id, access::ensure_class_manager, error_response};

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    class_id: i64,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    if assignment_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            "Assignment title must not be empty",
        )));
    }
    if assignment_data.total_points.is_some_and(|p| p <= 0.0) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("total_points must be positive")));
    }

    match storage
        .create_assignment(class_id, uid, assignment_data)
        .await
    {
        Ok(assignment) => {
            info!("Assignment {} created in class {}", assignment.id, class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assignment,
                "Assignment created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
