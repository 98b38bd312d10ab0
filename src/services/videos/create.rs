use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{VideoService, validate_video_fields};
use crate::models::{ApiResponse, ErrorCode, videos::requests::CreateVideoRequest};

pub async fn create_video(
    service: &VideoService,
    request: &HttpRequest,
    req: CreateVideoRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_video_fields(Some(&req.title), req.duration.as_deref()) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
    }
    if req.url.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidInput,
            "Video url must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_category_by_id(req.category_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CategoryNotFound,
                "Category not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    }

    match storage.create_video(req).await {
        Ok(video) => {
            info!("Video {} created in category {}", video.id, video.category_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(video, "Video created successfully")))
        }
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
