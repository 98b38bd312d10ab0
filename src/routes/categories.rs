use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::categories::requests::{
    CategoryListParams, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CategoryService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CategoryService 实例
static CATEGORY_SERVICE: Lazy<CategoryService> = Lazy::new(CategoryService::new_lazy);

// 按 collection_id 过滤
pub async fn list_categories(
    req: HttpRequest,
    query: web::Query<CategoryListParams>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.list_categories(&req, query.into_inner()).await
}

pub async fn create_category(
    req: HttpRequest,
    body: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.create_category(&req, body.into_inner()).await
}

pub async fn get_category(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.get_category(&req, path.0).await
}

pub async fn update_category(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.update_category(&req, path.0, body.into_inner()).await
}

// 删除分类，连同其下视频、资料文件
pub async fn delete_category(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.delete_category(&req, path.0).await
}

// 配置路由
pub fn configure_categories_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/categories")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_categories))
                    .route(
                        web::post()
                            .to(create_category)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_category))
                    .route(
                        web::put()
                            .to(update_category)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_category)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
