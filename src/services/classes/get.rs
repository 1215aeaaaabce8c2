use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{
    ApiResponse,
    classes::responses::{ClassPreviewResponse, ClassWithStudentCount},
};
use crate::services::{access::ensure_class_member, error_response};

pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 管理员、所属教师或已报名学生可见
    let class = match ensure_class_member(&storage, request, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    let student_count = match storage.count_active_students(class_id).await {
        Ok(count) => count,
        Err(e) => return Ok(error_response(&e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClassWithStudentCount {
            class,
            student_count,
        },
        "Class information retrieved successfully",
    )))
}

/// 学生加入前的预览：只认 active 班级的邀请码，返回字段子集
pub async fn preview_class_by_code(
    service: &ClassService,
    request: &HttpRequest,
    code: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class = match storage.get_active_class_by_code(&code).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                "Invalid invite code or class is not active",
            )));
        }
        Err(e) => return Ok(error_response(&e)),
    };

    let student_count = match storage.count_active_students(class.id).await {
        Ok(count) => count,
        Err(e) => return Ok(error_response(&e)),
    };

    let preview = ClassPreviewResponse {
        id: class.id,
        name: class.name,
        description: class.description,
        level: class.level,
        start_date: class.start_date,
        end_date: class.end_date,
        student_count,
        max_students: class.max_students,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        preview,
        "Class information retrieved successfully",
    )))
}
