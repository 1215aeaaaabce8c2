use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::class_students::requests::JoinClassRequest;
use crate::models::common::PaginationQuery;
use crate::models::common::pagination::MAX_PAGE_LIMIT;
use crate::models::users::entities::UserRole;
use crate::services::{ClassService, ClassStudentService};
use crate::utils::{SafeClassIdI64, SafeInviteCode};

// 懒加载的全局服务实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);
static CLASS_STUDENT_SERVICE: Lazy<ClassStudentService> = Lazy::new(ClassStudentService::new_lazy);

// HTTP处理程序
pub async fn list_my_classes(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    let (page, limit) = query.clamped(MAX_PAGE_LIMIT);
    CLASS_STUDENT_SERVICE.list_my_classes(&req, page, limit).await
}

pub async fn join_class(
    req: HttpRequest,
    join_data: web::Json<JoinClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .join_class(&req, join_data.into_inner())
        .await
}

pub async fn preview_class(req: HttpRequest, code: SafeInviteCode) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.preview_class_by_code(&req, code.0).await
}

pub async fn get_my_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE.get_my_class(&req, class_id.0).await
}

pub async fn leave_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE.leave_class(&req, class_id.0).await
}

// 配置路由：学生自助入口
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student/classes")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::get().to(list_my_classes)))
            .service(web::resource("/join").route(web::post().to(join_class)))
            .service(web::resource("/preview/{code}").route(web::get().to(preview_class)))
            .service(web::resource("/{class_id}").route(web::get().to(get_my_class)))
            .service(web::resource("/{class_id}/leave").route(web::delete().to(leave_class))),
    );
}
