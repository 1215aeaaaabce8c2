use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, users::entities::UserRole};
use crate::services::{access::ensure_class_member, error_response};

/// 下载资料：返回文件地址并把下载计数 +1
///
/// 文件本体在外部存储，这里只发 URL；学生访问隐藏资料按不存在处理。
pub async fn download_material(
    service: &MaterialService,
    request: &HttpRequest,
    class_id: i64,
    material_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_member(&storage, request, class_id).await {
        return Ok(resp);
    }

    let is_student = matches!(
        RequireJWT::extract_user_role(request),
        Some(UserRole::Student)
    );

    // 先读一次做可见性判断，避免给隐藏资料计数
    match storage.get_material(class_id, material_id).await {
        Ok(Some(material)) => {
            if is_student && !material.is_visible {
                return Ok(HttpResponse::NotFound()
                    .json(ApiResponse::error_empty("Material not found")));
            }
        }
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Material not found"))
            );
        }
        Err(e) => return Ok(error_response(&e)),
    }

    match storage.record_material_download(class_id, material_id).await {
        Ok(Some(material)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            material,
            "Material download recorded",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Material not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
