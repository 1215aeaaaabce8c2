use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::models::{ApiResponse, materials::requests::UpdateMaterialRequest};
use crate::services::{access::ensure_class_manager, error_response};

pub async fn update_material(
    service: &MaterialService,
    request: &HttpRequest,
    class_id: i64,
    material_id: i64,
    update_data: UpdateMaterialRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage
        .update_material(class_id, material_id, update_data)
        .await
    {
        Ok(Some(material)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            material,
            "Material updated successfully",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Material not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
