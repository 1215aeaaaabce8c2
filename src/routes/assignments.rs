use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::submissions::requests::SubmitAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::services::{AssignmentService, SubmissionService};
use crate::utils::{SafeAssignmentIdI64, SafeClassIdI64};

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// HTTP处理程序
pub async fn list_assignments(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, class_id.0, query.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, class_id.0, assignment_data.into_inner())
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeAssignmentIdI64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, assignment_id) = path.into_inner();
    ASSIGNMENT_SERVICE
        .get_assignment(&req, class_id.0, assignment_id.0)
        .await
}

pub async fn update_assignment(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeAssignmentIdI64)>,
    update_data: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let (class_id, assignment_id) = path.into_inner();
    ASSIGNMENT_SERVICE
        .update_assignment(&req, class_id.0, assignment_id.0, update_data.into_inner())
        .await
}

pub async fn delete_assignment(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeAssignmentIdI64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, assignment_id) = path.into_inner();
    ASSIGNMENT_SERVICE
        .delete_assignment(&req, class_id.0, assignment_id.0)
        .await
}

pub async fn submit_assignment(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeAssignmentIdI64)>,
    submission_data: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let (class_id, assignment_id) = path.into_inner();
    SUBMISSION_SERVICE
        .submit_assignment(&req, class_id.0, assignment_id.0, submission_data.into_inner())
        .await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 学生只看到已发布的作业
                    .route(web::get().to(list_assignments))
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{assignment_id}")
                    .route(web::get().to(get_assignment))
                    .route(
                        web::put()
                            .to(update_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{assignment_id}/submit").route(
                    web::post()
                        .to(submit_assignment)
                        .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                ),
            ),
    );
}
