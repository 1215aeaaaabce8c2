use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::materials::requests::{
    CreateMaterialRequest, MaterialListParams, UpdateMaterialRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::MaterialService;
use crate::utils::{SafeClassIdI64, SafeMaterialIdI64};

// 懒加载的全局 MATERIAL_SERVICE 实例
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);

// HTTP处理程序
pub async fn list_materials(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<MaterialListParams>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .list_materials(&req, class_id.0, query.into_inner())
        .await
}

pub async fn create_material(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    material_data: web::Json<CreateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .create_material(&req, class_id.0, material_data.into_inner())
        .await
}

pub async fn get_material(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeMaterialIdI64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, material_id) = path.into_inner();
    MATERIAL_SERVICE
        .get_material(&req, class_id.0, material_id.0)
        .await
}

pub async fn update_material(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeMaterialIdI64)>,
    update_data: web::Json<UpdateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    let (class_id, material_id) = path.into_inner();
    MATERIAL_SERVICE
        .update_material(&req, class_id.0, material_id.0, update_data.into_inner())
        .await
}

pub async fn delete_material(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeMaterialIdI64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, material_id) = path.into_inner();
    MATERIAL_SERVICE
        .delete_material(&req, class_id.0, material_id.0)
        .await
}

pub async fn download_material(
    req: HttpRequest,
    path: web::Path<(SafeClassIdI64, SafeMaterialIdI64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, material_id) = path.into_inner();
    MATERIAL_SERVICE
        .download_material(&req, class_id.0, material_id.0)
        .await
}

// 配置路由
pub fn configure_material_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/materials")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表对班级成员开放，学生只看到可见资料
                    .route(web::get().to(list_materials))
                    .route(
                        web::post()
                            .to(create_material)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{material_id}")
                    .route(web::get().to(get_material))
                    .route(
                        web::put()
                            .to(update_material)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_material)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{material_id}/download").route(web::post().to(download_material)),
            ),
    );
}
