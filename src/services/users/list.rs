use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse,
    common::pagination::ADMIN_MAX_PAGE_LIMIT,
    users::requests::{UserListParams, UserListQuery},
};
use crate::services::error_response;

pub async fn list_users(
    service: &UserService,
    request: &HttpRequest,
    params: UserListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (page, limit) = params.pagination.clamped(ADMIN_MAX_PAGE_LIMIT);
    let query = UserListQuery {
        page,
        limit,
        role: params.role,
        status: params.status,
        search: params.search,
    };

    match storage.list_users_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "User list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
