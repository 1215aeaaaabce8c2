pub mod create;
pub mod delete;
pub mod get;
pub mod invite;
pub mod lifecycle;
pub mod list;
pub mod stats;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{
    AdminClassQueryParams, ClassQueryParams, CreateClassRequest, UpdateClassRequest,
};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 创建班级
    pub async fn create_class(
        &self,
        req: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, req, class_data).await
    }

    // 获取班级列表（按角色过滤）
    pub async fn list_classes(
        &self,
        req: &HttpRequest,
        query: ClassQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, req, query).await
    }

    // 管理端班级列表（完整筛选）
    pub async fn list_classes_admin(
        &self,
        req: &HttpRequest,
        query: AdminClassQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classes_admin(self, req, query).await
    }

    // 根据班级 ID 获取班级信息
    pub async fn get_class(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        get::get_class(self, req, class_id).await
    }

    // 学生通过邀请码预览班级
    pub async fn preview_class_by_code(
        &self,
        req: &HttpRequest,
        code: String,
    ) -> ActixResult<HttpResponse> {
        get::preview_class_by_code(self, req, code).await
    }

    // 更新班级信息
    pub async fn update_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, req, class_id, update_data).await
    }

    // 删除班级
    pub async fn delete_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, req, class_id).await
    }

    // 激活班级（draft → active）
    pub async fn activate_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        lifecycle::activate_class(self, req, class_id).await
    }

    // 完成班级（active → completed，级联报名）
    pub async fn complete_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        lifecycle::complete_class(self, req, class_id).await
    }

    // 重新生成邀请码
    pub async fn regenerate_invite_code(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        invite::regenerate_invite_code(self, req, class_id).await
    }

    // 指派教师（管理员）
    pub async fn assign_teacher(
        &self,
        req: &HttpRequest,
        class_id: i64,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        update::assign_teacher(self, req, class_id, teacher_id).await
    }

    // 班级统计
    pub async fn class_stats(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        stats::class_stats(self, req, class_id).await
    }
}
