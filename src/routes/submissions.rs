use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::submissions::requests::{GradeSubmissionRequest, SubmissionListParams};
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;
use crate::utils::{SafeClassIdI64, SafeSubmissionIdI64};

// 懒加载的全局 SUBMISSION_SERVICE 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// HTTP处理程序
pub async fn list_submissions(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, class_id.0, query.into_inner())
        .await
}

pub async fn get_submission(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeSubmissionIdI64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, submission_id) = path.into_inner();
    SUBMISSION_SERVICE
        .get_submission(&req, class_id.0, submission_id.0)
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeSubmissionIdI64)>,
    grade_data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let (class_id, submission_id) = path.into_inner();
    SUBMISSION_SERVICE
        .grade_submission(&req, class_id.0, submission_id.0, grade_data.into_inner())
        .await
}

// 配置路由
pub fn configure_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/submissions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::get()
                        .to(list_submissions)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                // 提交者本人或教师/管理员可见，细粒度校验在服务层
                web::resource("/{submission_id}").route(web::get().to(get_submission)),
            )
            .service(
                web::resource("/{submission_id}/grade").route(
                    web::post()
                        .to(grade_submission)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
