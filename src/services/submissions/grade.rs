use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::models::{ApiResponse, submissions::requests::GradeSubmissionRequest};
use crate::services::{access::authenticated_user_id, access::ensure_class_manager, error_response};

/// 教师评分：pending/grading → graded
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    class_id: i64,
    submission_id: i64,
    grade_data: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    // 提交必须属于该班级的作业，且分数不超过作业满分
    let submission = match storage.get_submission(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Submission not found"))
            );
        }
        Err(e) => return Ok(error_response(&e)),
    };

    let assignment = match storage
        .get_assignment(class_id, submission.assignment_id)
        .await
    {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Submission not found"))
            );
        }
        Err(e) => return Ok(error_response(&e)),
    };

    if grade_data.score < 0.0 || grade_data.score > assignment.total_points {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(format!(
            "score must be between 0 and {}",
            assignment.total_points
        ))));
    }

    match storage
        .grade_submission(submission_id, uid, grade_data)
        .await
    {
        Ok(submission) => {
            info!("Submission {} graded by {}", submission_id, uid);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                submission,
                "Submission graded successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
