use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::playback::requests::UpdateProgressRequest;
use crate::services::PlaybackService;

// 懒加载的全局 PlaybackService 实例
static PLAYBACK_SERVICE: Lazy<PlaybackService> = Lazy::new(PlaybackService::new_lazy);

pub async fn update_progress(
    req: HttpRequest,
    body: web::Json<UpdateProgressRequest>,
) -> ActixResult<HttpResponse> {
    PLAYBACK_SERVICE
        .update_progress(&req, body.into_inner())
        .await
}

pub async fn list_playback_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    PLAYBACK_SERVICE.list_playback_stats(&req).await
}

// 配置路由
pub fn configure_playback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/playback-stats")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_playback_stats))
            .route("/progress", web::post().to(update_progress)),
    );
}
