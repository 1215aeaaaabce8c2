//! 管理端路由
//!
//! /api/v1/admin 下的班级管理镜像：完整筛选列表、生命周期操作、
//! 指派教师、总览报告，以及各班级资源的只读视图。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::announcements::requests::AnnouncementListParams;
use crate::models::assignments::requests::AssignmentListParams;
use crate::models::class_students::requests::EnrollmentListParams;
use crate::models::classes::requests::{AdminClassQueryParams, AssignTeacherRequest, UpdateClassRequest};
use crate::models::materials::requests::MaterialListParams;
use crate::models::schedules::requests::ScheduleListParams;
use crate::models::submissions::requests::SubmissionListParams;
use crate::models::users::entities::UserRole;
use crate::services::{
    AnnouncementService, AssignmentService, ClassService, ClassStudentService, MaterialService,
    ReportService, ScheduleService, SubmissionService,
};
use crate::utils::{SafeClassIdI64, SafeStudentIdI64};

// 懒加载的全局服务实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);
static CLASS_STUDENT_SERVICE: Lazy<ClassStudentService> = Lazy::new(ClassStudentService::new_lazy);
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);
static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> = Lazy::new(AnnouncementService::new_lazy);
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<AdminClassQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .list_classes_admin(&req, query.into_inner())
        .await
}

pub async fn get_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.0).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

pub async fn assign_teacher(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    assign_data: web::Json<AssignTeacherRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .assign_teacher(&req, class_id.0, assign_data.teacher_id)
        .await
}

pub async fn activate_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.activate_class(&req, class_id.0).await
}

pub async fn complete_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.complete_class(&req, class_id.0).await
}

pub async fn class_stats(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.class_stats(&req, class_id.0).await
}

pub async fn list_class_students(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .list_class_students(&req, class_id.0, query.into_inner())
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

pub async fn overview_report(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.overview_report(&req).await
}

// 班级资源只读镜像
pub async fn list_materials(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<MaterialListParams>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .list_materials(&req, class_id.0, query.into_inner())
        .await
}

pub async fn list_schedules(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<ScheduleListParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .list_schedules(&req, class_id.0, query.into_inner())
        .await
}

pub async fn list_announcements(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<AnnouncementListParams>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .list_announcements(&req, class_id.0, query.into_inner())
        .await
}

pub async fn list_assignments(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, class_id.0, query.into_inner())
        .await
}

pub async fn list_submissions(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, class_id.0, query.into_inner())
        .await
}

// 配置路由：整个 /admin 作用域要求管理员角色
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/reports/overview").route(web::get().to(overview_report)))
            .service(web::resource("/classes").route(web::get().to(list_classes)))
            .service(
                web::resource("/classes/{class_id}")
                    .route(web::get().to(get_class))
                    .route(web::put().to(update_class))
                    .route(web::delete().to(delete_class)),
            )
            .service(
                web::resource("/classes/{class_id}/assign-teacher")
                    .route(web::put().to(assign_teacher)),
            )
            .service(
                web::resource("/classes/{class_id}/activate")
                    .route(web::post().to(activate_class)),
            )
            .service(
                web::resource("/classes/{class_id}/complete")
                    .route(web::post().to(complete_class)),
            )
            .service(web::resource("/classes/{class_id}/stats").route(web::get().to(class_stats)))
            .service(
                web::resource("/classes/{class_id}/students")
                    .route(web::get().to(list_class_students)),
            )
            .service(
                web::resource("/classes/{class_id}/students/{student_id}")
                    .route(web::delete().to(remove_student)),
            )
            .service(
                web::resource("/classes/{class_id}/materials")
                    .route(web::get().to(list_materials)),
            )
            .service(
                web::resource("/classes/{class_id}/schedules")
                    .route(web::get().to(list_schedules)),
            )
            .service(
                web::resource("/classes/{class_id}/announcements")
                    .route(web::get().to(list_announcements)),
            )
            .service(
                web::resource("/classes/{class_id}/assignments")
                    .route(web::get().to(list_assignments)),
            )
            .service(
                web::resource("/classes/{class_id}/submissions")
                    .route(web::get().to(list_submissions)),
            ),
    );
}
