use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::AnnouncementService;
use crate::models::{
    ApiResponse,
    announcements::{entities::Announcement, requests::CreateAnnouncementRequest},
    classes::entities::Class,
    notifications::entities::{BulkNotificationRequest, notification_type, related_entity_type},
};
use crate::services::{access::authenticated_user_id, access::ensure_class_manager, error_response};
use crate::storage::Storage;

pub async fn create_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    class_id: i64,
    announcement_data: CreateAnnouncementRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class = match ensure_class_manager(&storage, request, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    let uid = match authenticated_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    if announcement_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            "Announcement title must not be empty",
        )));
    }

    match storage
        .create_announcement(class_id, uid, announcement_data)
        .await
    {
        Ok(announcement) => {
            info!(
                "Announcement {} created in class {}",
                announcement.id, class_id
            );

            // 给班级内 active 学生写通知，失败只记日志，不影响公告本身
            notify_students(storage, class, announcement.clone());

            Ok(HttpResponse::Created().json(ApiResponse::success(
                announcement,
                "Announcement created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// 批量通知在后台任务中写入
fn notify_students(storage: Arc<dyn Storage>, class: Class, announcement: Announcement) {
    tokio::spawn(async move {
        let student_ids = match storage.list_active_student_ids(class.id).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(
                    "Failed to load students for announcement notification: {}",
                    e
                );
                return;
            }
        };

        if student_ids.is_empty() {
            return;
        }

        let request = BulkNotificationRequest {
            user_ids: student_ids,
            notification_type: notification_type::CLASS_ANNOUNCEMENT.to_string(),
            title: format!("New announcement in {}", class.name),
            message: announcement.title,
            action_url: Some(format!("/student/classes/{}", class.id)),
            related_entity_type: Some(related_entity_type::CLASS.to_string()),
            related_entity_id: Some(class.id),
        };

        match storage.create_bulk_notifications(request).await {
            Ok(count) => info!(
                "Queued {} notifications for announcement in class {}",
                count, class.id
            ),
            Err(e) => warn!("Failed to create announcement notifications: {}", e),
        }
    });
}
