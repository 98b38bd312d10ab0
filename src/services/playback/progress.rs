use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::PlaybackService;
use crate::models::{ApiResponse, ErrorCode, playback::requests::UpdateProgressRequest};
use crate::services::require_user;

/// 进度不限制上限，负数视为非法输入
pub fn validate_progress(req: &UpdateProgressRequest) -> Result<(), &'static str> {
    if req.progress < 0 {
        return Err("Progress must not be negative");
    }
    if req.duration < 0 {
        return Err("Duration must not be negative");
    }
    Ok(())
}

pub async fn update_progress(
    service: &PlaybackService,
    request: &HttpRequest,
    req: UpdateProgressRequest,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = validate_progress(&req) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidInput,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_video_by_id(req.video_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::VideoNotFound,
                "Video not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    }

    debug!(
        "User {} reports progress {} on video {}",
        user.id, req.progress, req.video_id
    );

    match storage
        .upsert_playback_progress(user.id, req.video_id, req.progress, req.duration)
        .await
    {
        Ok(stat) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stat,
            "Progress updated successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(progress: i32, duration: i32) -> UpdateProgressRequest {
        UpdateProgressRequest {
            video_id: 1,
            progress,
            duration,
        }
    }

    #[test]
    fn test_validate_progress() {
        assert!(validate_progress(&request(0, 0)).is_ok());
        // 超过 100 不拦截
        assert!(validate_progress(&request(120, 30)).is_ok());
        assert!(validate_progress(&request(-1, 0)).is_err());
        assert!(validate_progress(&request(10, -5)).is_err());
    }
}
