use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::{
    ApiResponse,
    common::pagination::MAX_PAGE_LIMIT,
    submissions::requests::{SubmissionListParams, SubmissionListQuery},
};
use crate::services::{access::ensure_class_manager, error_response};

/// 教师/管理员列出班级内的提交，可按状态/技能过滤
pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    class_id: i64,
    params: SubmissionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    let (page, limit) = params.pagination.clamped(MAX_PAGE_LIMIT);
    let query = SubmissionListQuery {
        page,
        limit,
        status: params.status,
        skill: params.skill,
    };

    match storage.list_submissions(class_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Submissions retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 提交详情：教师/管理员或提交者本人可见
pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    class_id: i64,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submission = match storage.get_submission(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Submission not found"))
            );
        }
        Err(e) => return Ok(error_response(&e)),
    };

    // 提交必须属于该班级的作业
    match storage
        .get_assignment(class_id, submission.assignment_id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Submission not found"))
            );
        }
        Err(e) => return Ok(error_response(&e)),
    }

    // 提交者本人直接放行，其余走管理权限
    let uid = crate::middlewares::RequireJWT::extract_user_id(request);
    if uid != Some(submission.student_id)
        && let Err(resp) = ensure_class_manager(&storage, request, class_id).await
    {
        return Ok(resp);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        submission,
        "Submission retrieved successfully",
    )))
}
