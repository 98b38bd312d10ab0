use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PlaybackService;
use crate::models::{ApiResponse, playback::responses::PlaybackStatListResponse};
use crate::services::require_user;

pub async fn list_playback_stats(
    service: &PlaybackService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.list_user_playback_stats(user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PlaybackStatListResponse { items },
            "Playback stats retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
