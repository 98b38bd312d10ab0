use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{StatsService, aggregate::aggregate};
use crate::models::{ApiResponse, ErrorCode};

pub async fn progress_stats(
    service: &StatsService,
    request: &HttpRequest,
    collection_id: i64,
) -> ActixResult<HttpResponse> {
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

    let video_count = match storage.count_collection_videos(collection_id).await {
        Ok(count) => count,
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    let records = match storage.list_course_progress_records(collection_id).await {
        Ok(records) => records,
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    debug!(
        "Aggregating progress for collection {collection_id}: {video_count} videos, {} rows",
        records.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        aggregate(video_count, &records),
        "Progress statistics retrieved successfully",
    )))
}
