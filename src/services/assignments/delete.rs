use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::ApiResponse;
use crate::services::{access::ensure_class_manager, error_response};

pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    class_id: i64,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.delete_assignment(class_id, assignment_id).await {
        Ok(true) => {
            info!(
                "Assignment {} deleted from class {}",
                assignment_id, class_id
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Assignment deleted successfully")))
        }
        Ok(false) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Assignment not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
