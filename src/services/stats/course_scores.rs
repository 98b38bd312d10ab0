use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StatsService;
use crate::models::{ApiResponse, ErrorCode, stats::responses::CourseScoresResponse};
use crate::services::require_user;

pub async fn course_scores(
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

    match storage.list_course_scores(collection_id, user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseScoresResponse { items },
            "Course scores retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
