use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MaterialService;
use crate::models::{ApiResponse, materials::requests::CreateMaterialRequest};
use crate::services::{access::authenticated_user_id, access::ensure_class_manager, error_response};

pub async fn create_material(
    service: &MaterialService,
    request: &HttpRequest,
    class_id: i64,
    material_data: CreateMaterialRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    if material_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("Material title must not be empty")));
    }

    match storage
        .create_material(class_id, uid, material_data)
        .await
    {
        Ok(material) => {
            info!("Material {} created in class {}", material.id, class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                material,
                "Material created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
