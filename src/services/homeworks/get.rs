use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_homework_by_id(homework_id).await {
        Ok(Some(homework)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            homework,
            "Homework retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
