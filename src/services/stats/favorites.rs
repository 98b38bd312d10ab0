use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StatsService;
use crate::models::{ApiResponse, stats::responses::FavoriteCourseStatsResponse};
use crate::services::require_user;

/// 收藏合辑下的播放记录和全部视频，前端据此绘制学习概览
pub async fn favorite_stats(
    service: &StatsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let collection_ids: Vec<i64> = match storage.list_favorite_collections(user.id).await {
        Ok(collections) => collections.into_iter().map(|c| c.id).collect(),
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    if collection_ids.is_empty() {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            FavoriteCourseStatsResponse {
                playback_stats: Vec::new(),
                videos: Vec::new(),
            },
            "Favorite course statistics retrieved successfully",
        )));
    }

    let playback_stats = match storage
        .list_user_collection_playback(user.id, &collection_ids)
        .await
    {
        Ok(rows) => rows,
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    match storage.list_collection_videos(&collection_ids).await {
        Ok(videos) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FavoriteCourseStatsResponse {
                playback_stats,
                videos,
            },
            "Favorite course statistics retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
