use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::ApiResponse;
use crate::services::{access::ensure_class_manager, error_response};

/// draft → active，其余状态返回 Conflict
pub async fn activate_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.activate_class(class_id).await {
        Ok(class) => {
            info!("Class {} activated", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class activated successfully")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// active → completed，并把所有 active 报名级联为 completed
pub async fn complete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.complete_class(class_id).await {
        Ok(class) => {
            info!("Class {} completed", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class completed successfully")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
