use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::class_students::requests::{
    BulkEnrollRequest, EnrollStudentRequest, EnrollmentListParams, UpdateEnrollmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ClassStudentService;
use crate::utils::{SafeClassIdI64, SafeStudentIdI64};

// 懒加载的全局 CLASS_STUDENT_SERVICE 实例
static CLASS_STUDENT_SERVICE: Lazy<ClassStudentService> = Lazy::new(ClassStudentService::new_lazy);

// HTTP处理程序
pub async fn list_class_students(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .list_class_students(&req, class_id.0, query.into_inner())
        .await
}

pub async fn enroll_student(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    enroll_data: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .enroll_student(&req, class_id.0, enroll_data.into_inner())
        .await
}

pub async fn bulk_enroll(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    enroll_data: web::Json<BulkEnrollRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .bulk_enroll(&req, class_id.0, enroll_data.into_inner())
        .await
}

pub async fn update_enrollment(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeStudentIdI64)>,
    update_data: web::Json<UpdateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    let (class_id, student_id) = path.into_inner();
    CLASS_STUDENT_SERVICE
        .update_enrollment(&req, class_id.0, student_id.0, update_data.into_inner())
        .await
}

pub async fn remove_student(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeStudentIdI64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, student_id) = path.into_inner();
    CLASS_STUDENT_SERVICE
        .remove_student(&req, class_id.0, student_id.0)
        .await
}

// 配置路由：报名管理全部走教师/管理员权限
pub fn configure_class_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/students")
            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_class_students))
                    .route(web::post().to(enroll_student)),
            )
            .service(web::resource("/bulk").route(web::post().to(bulk_enroll)))
            .service(
                web::resource("/{student_id}")
                    .route(web::put().to(update_enrollment))
                    .route(web::delete().to(remove_student)),
            ),
    );
}
