pub mod create;
pub mod delete;
pub mod download;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::materials::requests::{
    CreateMaterialRequest, MaterialListParams, UpdateMaterialRequest,
};
use crate::storage::Storage;

pub struct MaterialService {
    storage: Option<Arc<dyn Storage>>,
}

impl MaterialService {
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

    pub async fn create_material(
        &self,
        req: &HttpRequest,
        class_id: i64,
        material_data: CreateMaterialRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_material(self, req, class_id, material_data).await
    }

    // 列出资料：教师看全部，学生只看可见
    pub async fn list_materials(
        &self,
        req: &HttpRequest,
        class_id: i64,
        params: MaterialListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_materials(self, req, class_id, params).await
    }

    pub async fn get_material(
        &self,
        req: &HttpRequest,
        class_id: i64,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_material(self, req, class_id, material_id).await
    }

    pub async fn update_material(
        &self,
        req: &HttpRequest,
        class_id: i64,
        material_id: i64,
        update_data: UpdateMaterialRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_material(self, req, class_id, material_id, update_data).await
    }

    pub async fn delete_material(
        &self,
        req: &HttpRequest,
        class_id: i64,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_material(self, req, class_id, material_id).await
    }

    // 下载：访问校验 + 计数
    pub async fn download_material(
        &self,
        req: &HttpRequest,
        class_id: i64,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        download::download_material(self, req, class_id, material_id).await
    }
}
