//! 班级访问权限校验
//!
//! 管理类操作要求管理员或班级所属教师；
//! 成员类操作额外允许 active 报名的学生。

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    class_students::entities::EnrollmentStatus,
    classes::entities::Class,
    users::entities::UserRole,
};
use crate::storage::Storage;

use super::error_response;

/// 从请求扩展中取出已认证的用户 ID
pub(crate) fn authenticated_user_id(request: &HttpRequest) -> Result<i64, HttpResponse> {
    RequireJWT::extract_user_id(request).ok_or_else(|| {
        HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty("Unauthorized: missing user id"))
    })
}

/// 加载班级并校验管理权限：管理员放行，教师必须是班级所有者
pub(crate) async fn ensure_class_manager(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    class_id: i64,
) -> Result<Class, HttpResponse> {
    let uid = authenticated_user_id(request)?;
    let role = RequireJWT::extract_user_role(request);

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Err(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Class not found"))
            );
        }
        Err(e) => return Err(error_response(&e)),
    };

    match role {
        Some(UserRole::Admin) => Ok(class),
        Some(UserRole::Teacher) if class.teacher_id == uid => Ok(class),
        Some(UserRole::Teacher) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            "You do not have access to this class",
        ))),
        _ => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            "You do not have permission to manage this class",
        ))),
    }
}

/// 加载班级并校验成员权限：管理员、所属教师或 active 报名的学生
pub(crate) async fn ensure_class_member(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    class_id: i64,
) -> Result<Class, HttpResponse> {
    let uid = authenticated_user_id(request)?;
    let role = RequireJWT::extract_user_role(request);

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Err(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Class not found"))
            );
        }
        Err(e) => return Err(error_response(&e)),
    };

    match role {
        Some(UserRole::Admin) => return Ok(class),
        Some(UserRole::Teacher) if class.teacher_id == uid => return Ok(class),
        _ => {}
    }

    // 学生路径：必须有 active 报名
    match storage.get_enrollment(class_id, uid).await {
        Ok(Some(enrollment)) if enrollment.status == EnrollmentStatus::Active => Ok(class),
        Ok(_) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            "You are not enrolled in this class",
        ))),
        Err(e) => Err(error_response(&e)),
    }
}
