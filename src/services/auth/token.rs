use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    auth::responses::{RefreshTokenResponse, UserInfoResponse},
};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 用 cookie 中的 refresh token 换新的 access token
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty("Missing refresh token cookie")));
    };

    match JwtUtils::refresh_access_token(&refresh_token) {
        Ok(access_token) => {
            let response = RefreshTokenResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Token refreshed successfully",
            )))
        }
        Err(e) => {
            info!("Refresh token rejected: {}", e);
            Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty("Invalid or expired refresh token")))
        }
    }
}

/// 返回当前登录用户（RequireJWT 已放进请求扩展）
pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty("Authentication required"))),
    }
}
