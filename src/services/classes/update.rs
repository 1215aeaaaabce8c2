use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::{
    ApiResponse, classes::requests::UpdateClassRequest, users::entities::UserRole,
};
use crate::services::{access::ensure_class_manager, error_response};
use crate::utils::validate::validate_date_string;

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    for date in [&update_data.start_date, &update_data.end_date]
        .into_iter()
        .flatten()
    {
        if let Err(msg) = validate_date_string(date) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
        }
    }
    if update_data.max_students.is_some_and(|m| m < 1) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("max_students must be at least 1")));
    }

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class updated successfully")))
        }
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Class not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// 指派教师，仅管理员路由挂载
pub async fn assign_teacher(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 目标用户必须存在且是教师
    match storage.get_user_by_id(teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                "Classes can only be assigned to teachers",
            )));
        }
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Teacher not found"))
            );
        }
        Err(e) => return Ok(error_response(&e)),
    }

    match storage.assign_teacher(class_id, teacher_id).await {
        Ok(Some(class)) => {
            info!("Class {} assigned to teacher {}", class_id, teacher_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Teacher assigned successfully")))
        }
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Class not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
