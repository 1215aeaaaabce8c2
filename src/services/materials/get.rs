use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, users::entities::UserRole};
use crate::services::{access::ensure_class_member, error_response};

pub async fn get_material(
    service: &MaterialService,
    request: &HttpRequest,
    class_id: i64,
    material_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_member(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.get_material(class_id, material_id).await {
        Ok(Some(material)) => {
            // 学生不可见隐藏资料
            let is_student = matches!(
                RequireJWT::extract_user_role(request),
                Some(UserRole::Student)
            );
            if is_student && !material.is_visible {
                return Ok(HttpResponse::NotFound()
                    .json(ApiResponse::error_empty("Material not found")));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                material,
                "Material retrieved successfully",
            )))
        }
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Material not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
