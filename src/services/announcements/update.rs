use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::{ApiResponse, announcements::requests::UpdateAnnouncementRequest};
use crate::services::{access::ensure_class_manager, error_response};

pub async fn update_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    class_id: i64,
    announcement_id: i64,
    update_data: UpdateAnnouncementRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage
        .update_announcement(class_id, announcement_id, update_data)
        .await
    {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            announcement,
            "Announcement updated successfully",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Announcement not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
