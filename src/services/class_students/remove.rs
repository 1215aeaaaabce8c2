use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassStudentService;
use crate::models::ApiResponse;
use crate::services::{access::authenticated_user_id, access::ensure_class_manager, error_response};

/// 教师/管理员移除学生：状态迁移到 dropped，记录操作者，行保留
pub async fn remove_student(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    match storage
        .drop_enrollment(class_id, student_id, Some(uid))
        .await
    {
        Ok(_) => {
            info!("Student {} removed from class {}", student_id, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student removed from class successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
