use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::users::entities::UserRole;
use crate::models::ApiResponse;
use crate::services::{access::authenticated_user_id, error_response};
use crate::storage::Storage;
use crate::utils::validate::validate_date_string;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    mut class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let role = RequireJWT::extract_user_role(request);
    let storage = service.get_storage(request);

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = validate_class_fields(&class_data) {
        return Ok(resp);
    }

    // 权限校验，并确定班级归属的教师
    match role {
        Some(UserRole::Admin) => {
            let Some(teacher_id) = class_data.teacher_id else {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    "teacher_id is required when creating a class as admin",
                )));
            };
            if let Err(resp) = check_teacher_exists(&storage, teacher_id).await {
                return Ok(resp);
            }
        }
        Some(UserRole::Teacher) => {
            if class_data.teacher_id.is_some_and(|id| id != uid) {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    "You do not have permission to create a class for another teacher",
                )));
            }
            class_data.teacher_id = Some(uid);
        }
        _ => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                "You do not have permission to create a class",
            )));
        }
    }

    // 创建班级
    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created successfully by {}", class.name, uid);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(class, "Class created successfully")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// 请求字段校验辅助函数
fn validate_class_fields(class_data: &CreateClassRequest) -> Result<(), HttpResponse> {
    if class_data.name.trim().is_empty() {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("Class name must not be empty")));
    }
    if class_data.max_students.is_some_and(|m| m < 1) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("max_students must be at least 1")));
    }
    for date in [&class_data.start_date, &class_data.end_date]
        .into_iter()
        .flatten()
    {
        if let Err(msg) = validate_date_string(date) {
            return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
        }
    }
    if let (Some(start), Some(end)) = (&class_data.start_date, &class_data.end_date)
        && start > end
    {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            "start_date must not be later than end_date",
        )));
    }
    Ok(())
}

/// 管理员指定的教师必须存在且具有教师角色
async fn check_teacher_exists(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_id(teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => Ok(()),
        Ok(Some(_)) => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            "Classes can only be assigned to teachers",
        ))),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty("Teacher not found"))),
        Err(e) => Err(error_response(&e)),
    }
}
