pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::announcements::requests::{
    AnnouncementListParams, CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 发布公告（附带批量通知）
    pub async fn create_announcement(
        &self,
        req: &HttpRequest,
        class_id: i64,
        announcement_data: CreateAnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_announcement(self, req, class_id, announcement_data).await
    }

    // 列出公告，置顶在前
    pub async fn list_announcements(
        &self,
        req: &HttpRequest,
        class_id: i64,
        params: AnnouncementListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_announcements(self, req, class_id, params).await
    }

    pub async fn get_announcement(
        &self,
        req: &HttpRequest,
        class_id: i64,
        announcement_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::get_announcement(self, req, class_id, announcement_id).await
    }

    pub async fn update_announcement(
        &self,
        req: &HttpRequest,
        class_id: i64,
        announcement_id: i64,
        update_data: UpdateAnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_announcement(self, req, class_id, announcement_id, update_data).await
    }

    pub async fn delete_announcement(
        &self,
        req: &HttpRequest,
        class_id: i64,
        announcement_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_announcement(self, req, class_id, announcement_id).await
    }
}
