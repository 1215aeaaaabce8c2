pub mod enroll;
pub mod join;
pub mod leave;
pub mod list;
pub mod remove;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::class_students::requests::{
    BulkEnrollRequest, EnrollStudentRequest, EnrollmentListParams, JoinClassRequest,
    UpdateEnrollmentRequest,
};
use crate::storage::Storage;

pub struct ClassStudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassStudentService {
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

    // 教师添加单个学生
    pub async fn enroll_student(
        &self,
        req: &HttpRequest,
        class_id: i64,
        enroll_data: EnrollStudentRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_student(self, req, class_id, enroll_data).await
    }

    // 教师批量添加学生
    pub async fn bulk_enroll(
        &self,
        req: &HttpRequest,
        class_id: i64,
        enroll_data: BulkEnrollRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::bulk_enroll(self, req, class_id, enroll_data).await
    }

    // 学生通过邀请码加入班级
    pub async fn join_class(
        &self,
        req: &HttpRequest,
        join_data: JoinClassRequest,
    ) -> ActixResult<HttpResponse> {
        join::join_class(self, req, join_data).await
    }

    // 教师/管理员移除学生（状态 → dropped）
    pub async fn remove_student(
        &self,
        req: &HttpRequest,
        class_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        remove::remove_student(self, req, class_id, student_id).await
    }

    // 学生主动退课（仅 active 可退）
    pub async fn leave_class(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        leave::leave_class(self, req, class_id).await
    }

    // 教师人工修正报名状态/进度
    pub async fn update_enrollment(
        &self,
        req: &HttpRequest,
        class_id: i64,
        student_id: i64,
        update_data: UpdateEnrollmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_enrollment(self, req, class_id, student_id, update_data).await
    }

    // 列出班级学生
    pub async fn list_class_students(
        &self,
        req: &HttpRequest,
        class_id: i64,
        params: EnrollmentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_class_students(self, req, class_id, params).await
    }

    // 学生查看自己的班级
    pub async fn list_my_classes(
        &self,
        req: &HttpRequest,
        page: i64,
        limit: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_my_classes(self, req, page, limit).await
    }

    // 学生查看自己所在班级的详情
    pub async fn get_my_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::get_my_class(self, req, class_id).await
    }
}
