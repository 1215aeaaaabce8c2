use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    assignments::entities::AssignmentStatus,
    assignments::requests::{AssignmentListParams, AssignmentListQuery},
    common::pagination::MAX_PAGE_LIMIT,
    users::entities::UserRole,
};
use crate::services::{access::ensure_class_member, error_response};

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    class_id: i64,
    params: AssignmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_member(&storage, request, class_id).await {
        return Ok(resp);
    }

    let (page, limit) = params.pagination.clamped(MAX_PAGE_LIMIT);

    // 学生只能看到已发布的作业
    let is_student = matches!(
        RequireJWT::extract_user_role(request),
        Some(UserRole::Student)
    );
    let status = if is_student {
        Some(AssignmentStatus::Published)
    } else {
        params.status
    };

    let query = AssignmentListQuery {
        page,
        limit,
        status,
    };

    match storage.list_assignments(class_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Assignments retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    class_id: i64,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_member(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.get_assignment(class_id, assignment_id).await {
        Ok(Some(assignment)) => {
            let is_student = matches!(
                RequireJWT::extract_user_role(request),
                Some(UserRole::Student)
            );
            if is_student && assignment.status != AssignmentStatus::Published {
                return Ok(HttpResponse::NotFound()
                    .json(ApiResponse::error_empty("Assignment not found")));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                assignment,
                "Assignment retrieved successfully",
            )))
        }
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Assignment not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
