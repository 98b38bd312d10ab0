use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{HOMEWORK_TITLE_MAX_CHARS, HomeworkService};
use crate::models::{ApiResponse, ErrorCode, homeworks::requests::UpdateHomeworkRequest};
use crate::utils::validate::validate_title;

pub async fn update_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    req: UpdateHomeworkRequest,
) -> ActixResult<HttpResponse> {
    if let Some(title) = &req.title
        && let Err(msg) = validate_title(title, HOMEWORK_TITLE_MAX_CHARS)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
    }

    let storage = service.get_storage(request);

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

    match storage.update_homework(homework_id, req).await {
        Ok(Some(homework)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            homework,
            "Homework updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
