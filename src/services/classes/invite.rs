use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::{ApiResponse, classes::responses::InviteCodeResponse};
use crate::services::{access::ensure_class_manager, error_response};

/// 重新生成邀请码，旧码立即失效
pub async fn regenerate_invite_code(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_manager(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.regenerate_invite_code(class_id).await {
        Ok(invite_code) => {
            info!("Invite code regenerated for class {}", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                InviteCodeResponse { invite_code },
                "Invite code regenerated successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
