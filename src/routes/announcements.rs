use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::announcements::requests::{
    AnnouncementListParams, CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AnnouncementService;
use crate::utils::{SafeAnnouncementIdI64, SafeClassIdI64};

// 懒加载的全局 ANNOUNCEMENT_SERVICE 实例
static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> = Lazy::new(AnnouncementService::new_lazy);

// HTTP处理程序
pub async fn list_announcements(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<AnnouncementListParams>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .list_announcements(&req, class_id.0, query.into_inner())
        .await
}

pub async fn create_announcement(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    announcement_data: web::Json<CreateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .create_announcement(&req, class_id.0, announcement_data.into_inner())
        .await
}

pub async fn get_announcement(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeAnnouncementIdI64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, announcement_id) = path.into_inner();
    ANNOUNCEMENT_SERVICE
        .get_announcement(&req, class_id.0, announcement_id.0)
        .await
}

pub async fn update_announcement(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeAnnouncementIdI64)>,
    update_data: web::Json<UpdateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    let (class_id, announcement_id) = path.into_inner();
    ANNOUNCEMENT_SERVICE
        .update_announcement(&req, class_id.0, announcement_id.0, update_data.into_inner())
        .await
}

pub async fn delete_announcement(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeAnnouncementIdI64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, announcement_id) = path.into_inner();
    ANNOUNCEMENT_SERVICE
        .delete_announcement(&req, class_id.0, announcement_id.0)
        .await
}

// 配置路由
pub fn configure_announcement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/announcements")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_announcements))
                    .route(
                        web::post()
                            .to(create_announcement)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{announcement_id}")
                    .route(web::get().to(get_announcement))
                    .route(
                        web::put()
                            .to(update_announcement)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_announcement)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
