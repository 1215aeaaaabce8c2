use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::ApiResponse;
use crate::services::{access::authenticated_user_id, error_response};

pub async fn delete_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不允许删除自己
    match authenticated_user_id(request) {
        Ok(uid) if uid == user_id => {
            return Ok(HttpResponse::Conflict()
                .json(ApiResponse::error_empty("You cannot delete your own account")));
        }
        Ok(_) => {}
        Err(resp) => return Ok(resp),
    }

    match storage.delete_user(user_id).await {
        Ok(true) => {
            info!("User {} deleted", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("User not found"))),
        Err(e) => Ok(error_response(&e)),
    }
}
