use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::models::{
    ApiResponse,
    assignments::entities::AssignmentStatus,
    class_students::entities::EnrollmentStatus,
    submissions::requests::SubmitAssignmentRequest,
};
use crate::services::{access::authenticated_user_id, error_response};

/// 学生提交作业
///
/// 前置条件：active 报名 + 作业已发布。未评分的旧提交会被覆盖。
pub async fn submit_assignment(
    service: &SubmissionService,
    request: &HttpRequest,
    class_id: i64,
    assignment_id: i64,
    submission_data: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    // 必须是班级的 active 学生
    match storage.get_enrollment(class_id, uid).await {
        Ok(Some(enrollment)) if enrollment.status == EnrollmentStatus::Active => {}
        Ok(_) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                "You are not enrolled in this class",
            )));
        }
        Err(e) => return Ok(error_response(&e)),
    }

    // 作业必须存在且已发布
    match storage.get_assignment(class_id, assignment_id).await {
        Ok(Some(assignment)) if assignment.status == AssignmentStatus::Published => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                "Assignment is not open for submissions",
            )));
        }
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Assignment not found"))
            );
        }
        Err(e) => return Ok(error_response(&e)),
    }

    if submission_data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            "Submission content must not be empty",
        )));
    }

    match storage
        .submit_assignment(assignment_id, uid, submission_data)
        .await
    {
        Ok(submission) => {
            info!(
                "Student {} submitted assignment {} in class {}",
                uid, assignment_id, class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                submission,
                "Assignment submitted successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
