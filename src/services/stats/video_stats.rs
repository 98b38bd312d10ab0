use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StatsService, aggregate};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::require_user;

/// 当前用户在合辑内已完成、进行中、未开始的视频数
pub async fn video_stats(
    service: &StatsService,
    request: &HttpRequest,
    collection_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.get_collection_by_id(collection_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CollectionNotFound,
                "Collection not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    }

    let total = match storage.count_collection_videos(collection_id).await {
        Ok(count) => count,
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    match storage
        .list_user_collection_playback(user.id, &[collection_id])
        .await
    {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            aggregate::video_stats(total, &rows),
            "Video statistics retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
