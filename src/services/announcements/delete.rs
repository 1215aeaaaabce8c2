use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AnnouncementService;
use crate::models::ApiResponse;
use crate::services::{access::ensure_class_manager, error_response};

pub async fn delete_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    class_id: i64,
    announcement_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.delete_announcement(class_id, announcement_id).await {
        Ok(true) => {
            info!(
                "Announcement {} deleted from class {}",
                announcement_id, class_id
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Announcement deleted successfully")))
        }
        Ok(false) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Announcement not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
