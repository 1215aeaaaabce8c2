use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::ApiResponse;
use crate::services::error_response;

/// 总览报告：班级状态计数、等级分布、活跃报名总数
pub async fn overview_report(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.overview_report().await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            report,
            "Overview report retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
