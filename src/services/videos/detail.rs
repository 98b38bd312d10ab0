use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VideoService;
use crate::models::{ApiResponse, ErrorCode, videos::responses::VideoDetailResponse};
use crate::services::require_user;

pub async fn get_video(
    service: &VideoService,
    request: &HttpRequest,
    video_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let video = match storage.get_video_by_id(video_id).await {
        Ok(Some(video)) => video,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::VideoNotFound,
                "Video not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    match storage.ensure_playback_stat(user.id, video_id).await {
        Ok(playback) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            VideoDetailResponse { video, playback },
            "Video retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
