use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{ApiResponse, users::requests::CreateUserRequest};
use crate::services::error_response;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    mut user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }
    if let Err(msg) = validate_password_simple(&user_data.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    // 用户名与邮箱唯一
    match storage.get_user_by_username(&user_data.username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict()
                .json(ApiResponse::error_empty("Username already exists")));
        }
        Ok(None) => {}
        Err(e) => return Ok(error_response(&e)),
    }
    match storage.get_user_by_email(&user_data.email).await {
        Ok(Some(_)) => {
            return Ok(
                HttpResponse::Conflict().json(ApiResponse::error_empty("Email already exists"))
            );
        }
        Ok(None) => {}
        Err(e) => return Ok(error_response(&e)),
    }

    // 入库前完成哈希
    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e)),
    };

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} created", user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "User created successfully")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
