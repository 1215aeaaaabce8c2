use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::{
    ApiResponse, announcements::requests::AnnouncementListParams,
    common::pagination::MAX_PAGE_LIMIT,
};
use crate::services::{access::ensure_class_member, error_response};

pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
    class_id: i64,
    params: AnnouncementListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_member(&storage, request, class_id).await {
        return Ok(resp);
    }

    let (page, limit) = params.pagination.clamped(MAX_PAGE_LIMIT);

    match storage.list_announcements(class_id, page, limit).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success_paginated(
            response.items,
            response.pagination,
            "Announcements retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    class_id: i64,
    announcement_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = ensure_class_member(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.get_announcement(class_id, announcement_id).await {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            announcement,
            "Announcement retrieved successfully",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Announcement not found")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
