use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CollectionService;
use crate::models::{ApiResponse, ErrorCode, collections::responses::CollectionDetailResponse};
use crate::services::require_user;

pub async fn get_collection(
    service: &CollectionService,
    request: &HttpRequest,
    collection_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let collection = match storage.get_collection_by_id(collection_id).await {
        Ok(Some(collection)) => collection,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CollectionNotFound,
                "Collection not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    let categories = match storage.list_categories(Some(collection_id)).await {
        Ok(categories) => categories,
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    let is_favorited = match storage.is_favorited(user.id, collection_id).await {
        Ok(flag) => flag,
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CollectionDetailResponse {
            collection,
            categories,
            is_favorited,
        },
        "Collection retrieved successfully",
    )))
}
