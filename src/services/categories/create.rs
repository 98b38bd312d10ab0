use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CATEGORY_NAME_MAX_CHARS, CategoryService};
use crate::models::{ApiResponse, ErrorCode, categories::requests::CreateCategoryRequest};
use crate::utils::validate::validate_title;

pub async fn create_category(
    service: &CategoryService,
    request: &HttpRequest,
    req: CreateCategoryRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_title(&req.name, CATEGORY_NAME_MAX_CHARS) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
    }

    let storage = service.get_storage(request);

    // 所属合辑必须存在
    match storage.get_collection_by_id(req.collection_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CollectionNotFound,
                "Collection not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    }

    match storage.create_category(req).await {
        Ok(category) => {
            info!(
                "Category {} created in collection {}",
                category.id, category.collection_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                category,
                "Category created successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
