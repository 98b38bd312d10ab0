use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VideoService;
use crate::models::{
    ApiResponse, ErrorCode,
    videos::{requests::VideoListParams, responses::VideoListResponse},
};

pub async fn list_videos(
    service: &VideoService,
    request: &HttpRequest,
    query: VideoListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_videos(query.category_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            VideoListResponse { items },
            "Video list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve video list: {e}"),
            )),
        ),
    }
}
