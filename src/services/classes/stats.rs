use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::ApiResponse;
use crate::services::{access::ensure_class_manager, error_response};

pub async fn class_stats(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.class_stats(class_id).await {
        Ok(Some(stats)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Class statistics retrieved successfully",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Class not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
