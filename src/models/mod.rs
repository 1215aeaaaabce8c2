//! 业务数据模型
//!
//! 每个资源一个子模块，按 entities / requests / responses 划分。
//! 与 entity 模块中的数据库实体分离，由 entity 的 into_* 方法转换。

pub mod common;

pub mod announcements;
pub mod assignments;
pub mod auth;
pub mod class_students;
pub mod classes;
pub mod materials;
pub mod notifications;
pub mod reports;
pub mod schedules;
pub mod submissions;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于输出预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
