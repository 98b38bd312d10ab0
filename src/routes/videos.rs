use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::videos::requests::{
    CreateVideoRequest, UpdateVideoRequest, VideoListParams,
};
use crate::models::users::entities::UserRole;
use crate::services::VideoService;
use crate::utils::SafeIDI64;

// 懒加载的全局 VideoService 实例
static VIDEO_SERVICE: Lazy<VideoService> = Lazy::new(VideoService::new_lazy);

// 支持 category_id 过滤
pub async fn list_videos(
    req: HttpRequest,
    query: web::Query<VideoListParams>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.list_videos(&req, query.into_inner()).await
}

pub async fn create_video(
    req: HttpRequest,
    body: web::Json<CreateVideoRequest>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.create_video(&req, body.into_inner()).await
}

// 视频详情，同时为当前用户建立播放记录
pub async fn get_video(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.get_video(&req, path.0).await
}

pub async fn update_video(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateVideoRequest>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.update_video(&req, path.0, body.into_inner()).await
}

pub async fn delete_video(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.delete_video(&req, path.0).await
}

// 配置路由
pub fn configure_videos_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/videos")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_videos))
                    .route(
                        web::post()
                            .to(create_video)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_video))
                    .route(
                        web::put()
                            .to(update_video)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_video)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
