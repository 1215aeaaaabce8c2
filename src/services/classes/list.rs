use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    classes::requests::{AdminClassQueryParams, ClassListQuery, ClassQueryParams},
    common::pagination::{ADMIN_MAX_PAGE_LIMIT, MAX_PAGE_LIMIT},
    users::entities::UserRole,
};
use crate::services::{access::authenticated_user_id, error_response};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
) -> ActixResult<HttpResponse> {
    let role = RequireJWT::extract_user_role(request);
    let storage = service.get_storage(request);

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    let (page, limit) = query.pagination.clamped(MAX_PAGE_LIMIT);

    let mut list_query = ClassListQuery {
        page,
        limit,
        search: query.search,
        status: query.status,
        level: query.level,
        ..Default::default()
    };

    match role {
        Some(UserRole::Admin) => {
            // 管理员可查全部班级
        }
        Some(UserRole::Teacher) => {
            // 教师只能查询自己的班级
            list_query.teacher_id = Some(uid);
        }
        Some(UserRole::Student) => {
            // 学生走自己的报名视图
            return match storage.list_student_classes(uid, page, limit).await {
                Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
                    response.items,
                    response.pagination,
                    "Class list retrieved successfully",
                ))),
                Err(e) => Ok(error_response(&e)),
            };
        }
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                "Unauthorized: missing required role",
            )));
        }
    }

    match storage.list_classes_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Class list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 管理端列表：完整筛选 + 排序，单页上限放宽到 100
pub async fn list_classes_admin(
    service: &ClassService,
    request: &HttpRequest,
    query: AdminClassQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (page, limit) = query.pagination.clamped(ADMIN_MAX_PAGE_LIMIT);

    let list_query = ClassListQuery {
        page,
        limit,
        search: query.search,
        status: query.status,
        level: query.level,
        teacher_id: query.teacher_id,
        sort_by: query.sort_by,
        sort_order: query.sort_order,
    };

    match storage.list_classes_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Class list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
