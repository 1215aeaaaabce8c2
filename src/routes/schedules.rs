use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::schedules::requests::{
    CreateScheduleRequest, MarkAttendanceRequest, ScheduleListParams,
};
use crate::models::users::entities::UserRole;
use crate::services::ScheduleService;
use crate::utils::SafeClassIdI64;

// 懒加载的全局 SCHEDULE_SERVICE 实例
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);

// HTTP处理程序
pub async fn list_schedules(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<ScheduleListParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .list_schedules(&req, class_id.0, query.into_inner())
        .await
}

pub async fn create_schedule(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    schedule_data: web::Json<CreateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .create_schedule(&req, class_id.0, schedule_data.into_inner())
        .await
}

pub async fn list_attendance(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<ScheduleListParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .list_attendance(&req, class_id.0, query.into_inner())
        .await
}

pub async fn mark_attendance(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    attendance_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .mark_attendance(&req, class_id.0, attendance_data.into_inner())
        .await
}

// 配置路由
pub fn configure_schedule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/schedule")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_schedules))
                    .route(
                        web::post()
                            .to(create_schedule)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_attendance))
                    .route(
                        web::post()
                            .to(mark_attendance)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
