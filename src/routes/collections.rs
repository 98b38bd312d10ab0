use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::collections::requests::{
    CollectionListParams, CreateCollectionRequest, UpdateCollectionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{CollectionService, StatsService};
use crate::utils::{SafeCategoryIdI64, SafeIDI64};

// 懒加载的全局 Service 实例
static COLLECTION_SERVICE: Lazy<CollectionService> = Lazy::new(CollectionService::new_lazy);
static STATS_SERVICE: Lazy<StatsService> = Lazy::new(StatsService::new_lazy);

// 列出合辑
pub async fn list_collections(
    req: HttpRequest,
    query: web::Query<CollectionListParams>,
) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE
        .list_collections(&req, query.into_inner())
        .await
}

// 创建合辑
pub async fn create_collection(
    req: HttpRequest,
    body: web::Json<CreateCollectionRequest>,
) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE
        .create_collection(&req, body.into_inner())
        .await
}

// 我创建的合辑
pub async fn list_created_collections(req: HttpRequest) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE.list_created_collections(&req).await
}

// 我收藏的合辑
pub async fn list_favorites(req: HttpRequest) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE.list_favorites(&req).await
}

pub async fn favorite_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    STATS_SERVICE.favorite_stats(&req).await
}

// 合辑详情
pub async fn get_collection(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE.get_collection(&req, path.0).await
}

pub async fn update_collection(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateCollectionRequest>,
) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE
        .update_collection(&req, path.0, body.into_inner())
        .await
}

pub async fn delete_collection(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE.delete_collection(&req, path.0).await
}

pub async fn favorite(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE.favorite(&req, path.0).await
}

pub async fn unfavorite(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE.unfavorite(&req, path.0).await
}

pub async fn video_stats(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STATS_SERVICE.video_stats(&req, path.0).await
}

// 学员学习进度排行
pub async fn progress_stats(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STATS_SERVICE.progress_stats(&req, path.0).await
}

pub async fn course_scores(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STATS_SERVICE.course_scores(&req, path.0).await
}

// 分类下的视频、作业与资料
pub async fn get_category_resources(
    req: HttpRequest,
    path: SafeIDI64,
    category: SafeCategoryIdI64,
) -> ActixResult<HttpResponse> {
    COLLECTION_SERVICE
        .get_category_resources(&req, path.0, category.0)
        .await
}

// 配置路由
pub fn configure_collections_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/collections")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_collections))
                    // 创建合辑 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_collection)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 固定路径需在 /{id} 之前注册
            .service(web::resource("/favorites").route(web::get().to(list_favorites)))
            .service(web::resource("/favorites/stats").route(web::get().to(favorite_stats)))
            .service(web::resource("/created").route(web::get().to(list_created_collections)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_collection))
                    // 创建者或管理员，业务层校验
                    .route(web::put().to(update_collection))
                    .route(web::delete().to(delete_collection)),
            )
            .service(web::resource("/{id}/favorite").route(web::post().to(favorite)))
            .service(web::resource("/{id}/unfavorite").route(web::post().to(unfavorite)))
            .service(web::resource("/{id}/video-stats").route(web::get().to(video_stats)))
            .service(
                web::resource("/{id}/progress-stats")
                    .route(web::get().to(progress_stats))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            .service(web::resource("/{id}/scores").route(web::get().to(course_scores)))
            .service(
                web::resource("/{id}/categories/{category_id}/resources")
                    .route(web::get().to(get_category_resources)),
            ),
    );
}
