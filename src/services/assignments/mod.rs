pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    pub async fn create_assignment(
        &self,
        req: &HttpRequest,
        class_id: i64,
        assignment_data: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, req, class_id, assignment_data).await
    }

    pub async fn list_assignments(
        &self,
        req: &HttpRequest,
        class_id: i64,
        params: AssignmentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, req, class_id, params).await
    }

    pub async fn get_assignment(
        &self,
        req: &HttpRequest,
        class_id: i64,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::get_assignment(self, req, class_id, assignment_id).await
    }

    pub async fn update_assignment(
        &self,
        req: &HttpRequest,
        class_id: i64,
        assignment_id: i64,
        update_data: UpdateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, req, class_id, assignment_id, update_data).await
    }

    pub async fn delete_assignment(
        &self,
        req: &HttpRequest,
        class_id: i64,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, req, class_id, assignment_id).await
    }
}
