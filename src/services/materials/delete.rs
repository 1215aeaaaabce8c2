use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MaterialService;
use crate::models::ApiResponse;
use crate::services::{access::ensure_class_manager, error_response};

pub async fn delete_material(
    service: &MaterialService,
    request: &HttpRequest,
    class_id: i64,
    material_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.delete_material(class_id, material_id).await {
        Ok(true) => {
            info!("Material {} deleted from class {}", material_id, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Material deleted successfully")))
        }
        Ok(false) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Material not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
