use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CATEGORY_NAME_MAX_CHARS, CategoryService};
use crate::models::{ApiResponse, ErrorCode, categories::requests::UpdateCategoryRequest};
use crate::utils::validate::validate_title;

pub async fn update_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
    req: UpdateCategoryRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &req.name
        && let Err(msg) = validate_title(name, CATEGORY_NAME_MAX_CHARS)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_category(category_id, req).await {
        Ok(Some(category)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            category,
            "Category updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CategoryNotFound,
            "Category not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
