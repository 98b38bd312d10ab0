use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::materials::requests::{
    CreateMaterialRequest, MaterialListParams, UpdateMaterialRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::MaterialService;
use crate::utils::SafeIDI64;

// 学习资料
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);

pub async fn list_materials(
    req: HttpRequest,
    query: web::Query<MaterialListParams>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.list_materials(&req, query.into_inner()).await
}

pub async fn create_material(
    req: HttpRequest,
    body: web::Json<CreateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.create_material(&req, body.into_inner()).await
}

pub async fn get_material(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.get_material(&req, path.0).await
}

pub async fn update_material(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.update_material(&req, path.0, body.into_inner()).await
}

pub async fn delete_material(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.delete_material(&req, path.0).await
}

// 配置路由
pub fn configure_materials_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/materials")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_materials))
                    .route(
                        web::post()
                            .to(create_material)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
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
            ),
    );
}
