use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassStudentService;
use crate::models::{ApiResponse, class_students::requests::JoinClassRequest};
use crate::services::{access::authenticated_user_id, error_response};

/// 学生自助加入：只认 active 班级的邀请码，无归属校验
pub async fn join_class(
    service: &ClassStudentService,
    request: &HttpRequest,
    join_data: JoinClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    let invite_code = join_data.invite_code.trim().to_uppercase();
    if invite_code.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("invite_code must not be empty")));
    }

    match storage.join_class_by_code(uid, &invite_code).await {
        Ok(enrollment) => {
            info!("Student {} joined class {} by code", uid, enrollment.class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                enrollment,
                "Class joined successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
