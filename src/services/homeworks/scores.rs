use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::{ApiResponse, ErrorCode, homeworks::responses::ScoreListResponse};
use crate::services::require_user;

/// `only_mine` 为 true 时只返回当前用户的成绩
pub async fn list_scores(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    only_mine: bool,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.get_homework_by_id(homework_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::HomeworkNotFound,
                "Homework not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    }

    let user_filter = only_mine.then_some(user.id);
    match storage.list_homework_scores(homework_id, user_filter).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScoreListResponse { items },
            "Scores retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
