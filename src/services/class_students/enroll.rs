use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassStudentService;
use crate::models::{
    ApiResponse,
    class_students::requests::{BulkEnrollRequest, EnrollStudentRequest},
};
use crate::services::{access::ensure_class_manager, error_response};

/// 教师添加单个学生
///
/// 容量、重复、dropped 重新激活的规则都在存储层事务内执行，
/// 这里只做归属校验并翻译结果。
pub async fn enroll_student(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
    enroll_data: EnrollStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage
        .enroll_student(class_id, enroll_data.student_id)
        .await
    {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in class {}",
                enroll_data.student_id, class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                enrollment,
                "Student enrolled successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// 批量添加：整体总是 200，逐项返回成败列表
pub async fn bulk_enroll(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
    enroll_data: BulkEnrollRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    if enroll_data.student_ids.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("student_ids must not be empty")));
    }

    match storage.bulk_enroll(class_id, &enroll_data.student_ids).await {
        Ok(result) => {
            info!(
                "Bulk enrollment for class {}: {} succeeded, {} failed",
                class_id,
                result.success.len(),
                result.failed.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, "Bulk enrollment processed")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
