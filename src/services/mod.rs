//! 业务逻辑层
//!
//! 每个资源一个目录、每个操作一个文件。服务结构体懒加载，
//! 存储句柄从请求的 app data 中取出。

pub mod access;

pub mod announcements;
pub mod assignments;
pub mod auth;
pub mod class_students;
pub mod classes;
pub mod materials;
pub mod reports;
pub mod schedules;
pub mod submissions;
pub mod users;

pub use announcements::AnnouncementService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use class_students::ClassStudentService;
pub use classes::ClassService;
pub use materials::MaterialService;
pub use reports::ReportService;
pub use schedules::ScheduleService;
pub use submissions::SubmissionService;
pub use users::UserService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::ClassroomError;
use crate::models::ApiResponse;

/// 把存储层错误映射为 HTTP 响应
///
/// NotFound/Conflict/Validation 的消息直接回给客户端，
/// 其余错误只记日志，对外统一 500。
pub(crate) fn error_response(e: &ClassroomError) -> HttpResponse {
    match e {
        ClassroomError::NotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(e.message()))
        }
        ClassroomError::Conflict(_) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(e.message()))
        }
        ClassroomError::Validation(_) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(e.message()))
        }
        ClassroomError::Authorization(_) => {
            HttpResponse::Forbidden().json(ApiResponse::error_empty(e.message()))
        }
        ClassroomError::Authentication(_) => {
            HttpResponse::Unauthorized().json(ApiResponse::error_empty(e.message()))
        }
        _ => {
            error!("{}", e.format_simple());
            HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty("Internal server error"))
        }
    }
}
