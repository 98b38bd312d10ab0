use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::VideoService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::media::remove_media_file;

pub async fn delete_video(
    service: &VideoService,
    request: &HttpRequest,
    video_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_video(video_id).await {
        Ok(Some(video)) => {
            let upload_dir = &AppConfig::get().upload.dir;
            remove_media_file(upload_dir, &video.url).await;
            if let Some(thumbnail) = &video.thumbnail {
                remove_media_file(upload_dir, thumbnail).await;
            }
            info!("Video {} deleted", video_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Video deleted successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::VideoNotFound,
            "Video not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
