use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassStudentService;
use crate::models::{ApiResponse, class_students::entities::EnrollmentStatus};
use crate::services::{access::authenticated_user_id, error_response};

/// 学生主动退课：只有 active 状态可以退
pub async fn leave_class(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    match storage.get_enrollment(class_id, uid).await {
        Ok(Some(enrollment)) => {
            if enrollment.status != EnrollmentStatus::Active {
                return Ok(HttpResponse::Conflict()
                    .json(ApiResponse::error_empty("You cannot leave this class")));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                "You are not enrolled in this class",
            )));
        }
        Err(e) => return Ok(error_response(&e)),
    }

    match storage.drop_enrollment(class_id, uid, None).await {
        Ok(_) => {
            info!("Student {} left class {}", uid, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Left class successfully")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
