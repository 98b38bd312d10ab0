use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{HOMEWORK_TITLE_MAX_CHARS, HomeworkService};
use crate::models::{ApiResponse, ErrorCode, homeworks::requests::CreateHomeworkRequest};
use crate::utils::validate::validate_title;

pub async fn create_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    req: CreateHomeworkRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_title(&req.title, HOMEWORK_TITLE_MAX_CHARS) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
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

    match storage.create_homework(req).await {
        Ok(homework) => {
            info!(
                "Homework {} created in category {}",
                homework.id, homework.category_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                homework,
                "Homework created successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
