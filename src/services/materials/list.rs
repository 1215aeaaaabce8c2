use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    common::pagination::MAX_PAGE_LIMIT,
    materials::requests::{MaterialListParams, MaterialListQuery},
    users::entities::UserRole,
};
use crate::services::{access::ensure_class_member, error_response};

/// 教师/管理员看到全部资料，学生只看到可见资料
pub async fn list_materials(
    service: &MaterialService,
    request: &HttpRequest,
    class_id: i64,
    params: MaterialListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_member(&storage, request, class_id).await {
        return Ok(resp);
    }

    let visible_only = matches!(
        RequireJWT::extract_user_role(request),
        Some(UserRole::Student)
    );

    let (page, limit) = params.pagination.clamped(MAX_PAGE_LIMIT);
    let query = MaterialListQuery {
        page,
        limit,
        visible_only,
    };

    match storage.list_materials(class_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Materials retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
