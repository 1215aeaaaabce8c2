use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    auth::UpdateProfileRequest,
    users::{
        entities::UserProfile,
        requests::UpdateUserRequest,
    },
};
use crate::services::error_response;
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

use super::AuthService;

/// 当前用户更新自己的资料（昵称、头像、密码）
pub async fn handle_update_profile(
    service: &AuthService,
    update_request: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty("Authentication required")));
    };

    let password = match update_request.password {
        Some(ref password) => {
            if let Err(msg) = validate_password_simple(password) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
            }
            match hash_password(password) {
                Ok(hash) => Some(hash),
                Err(e) => return Ok(error_response(&e)),
            }
        }
        None => None,
    };

    let profile = UserProfile {
        profile_name: update_request
            .profile_name
            .unwrap_or(user.profile.profile_name),
        avatar_url: update_request.avatar_url.or(user.profile.avatar_url),
    };

    let update = UpdateUserRequest {
        email: None,
        password,
        role: None,
        status: None,
        profile: Some(profile),
    };

    match storage.update_user(user.id, update).await {
        Ok(Some(updated)) => {
            info!("User {} updated profile", updated.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "Profile updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("User not found"))),
        Err(e) => Ok(error_response(&e)),
    }
}
