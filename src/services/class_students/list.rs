use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassStudentService;
use crate::models::{
    ApiResponse,
    class_students::entities::EnrollmentStatus,
    class_students::requests::{EnrollmentListParams, EnrollmentListQuery},
    common::pagination::MAX_PAGE_LIMIT,
};
use crate::services::{access::authenticated_user_id, access::ensure_class_manager, error_response};

/// 教师/管理员列出班级学生
pub async fn list_class_students(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
    params: EnrollmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    let (page, limit) = params.pagination.clamped(MAX_PAGE_LIMIT);
    let query = EnrollmentListQuery {
        page,
        limit,
        status: params.status,
    };

    match storage.list_class_students(class_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Class students retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 学生查看自己的班级列表
pub async fn list_my_classes(
    service: &ClassStudentService,
    request: &HttpRequest,
    page: i64,
    limit: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    match storage.list_student_classes(uid, page, limit).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Class list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 学生查看自己所在班级的详情，需要 active 报名
pub async fn get_my_class(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    let enrollment = match storage.get_enrollment(class_id, uid).await {
        Ok(Some(enrollment)) if enrollment.status == EnrollmentStatus::Active => enrollment,
        Ok(_) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                "You are not enrolled in this class",
            )));
        }
        Err(e) => return Ok(error_response(&e)),
    };

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            crate::models::class_students::responses::StudentClassView { class, enrollment },
            "Class information retrieved successfully",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Class not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
