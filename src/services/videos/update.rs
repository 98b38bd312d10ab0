use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{VideoService, validate_video_fields};
use crate::models::{ApiResponse, ErrorCode, videos::requests::UpdateVideoRequest};

pub async fn update_video(
    service: &VideoService,
    request: &HttpRequest,
    video_id: i64,
    req: UpdateVideoRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_video_fields(req.title.as_deref(), req.duration.as_deref()) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
    }

    let storage = service.get_storage(request);

    // 移动到其他分类时目标分类必须存在
    if let Some(category_id) = req.category_id {
        match storage.get_category_by_id(category_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::CategoryNotFound,
                    "Category not found",
                )));
            }
            Err(e) => return Ok(ApiResponse::from_error(&e)),
        }
    }

    match storage.update_video(video_id, req).await {
        Ok(Some(video)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(video, "Video updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::VideoNotFound,
            "Video not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
