use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CategoryService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_category_by_id(category_id).await {
        Ok(Some(category)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            category,
            "Category retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CategoryNotFound,
            "Category not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
