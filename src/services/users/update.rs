use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{ApiResponse, users::requests::UpdateUserRequest};
use crate::services::error_response;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    mut update_data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    if let Some(ref password) = update_data.password {
        if let Err(msg) = validate_password_simple(password) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
        }
        update_data.password = match hash_password(password) {
            Ok(hash) => Some(hash),
            Err(e) => return Ok(error_response(&e)),
        };
    }

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            info!("User {} updated", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "User updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("User not found"))),
        Err(e) => Ok(error_response(&e)),
    }
}
