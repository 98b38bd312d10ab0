use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CollectionService;
use crate::models::{
    ApiResponse, ErrorCode,
    collections::requests::{CollectionListParams, CollectionListQuery},
};
use crate::services::require_user;

pub async fn list_collections(
    service: &CollectionService,
    request: &HttpRequest,
    query: CollectionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = CollectionListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        creator_id: None,
        search: query.search,
    };

    match storage.list_collections_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Collection list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve collection list: {e}"),
            )),
        ),
    }
}

pub async fn list_created_collections(
    service: &CollectionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.list_collections_by_creator(user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            items,
            "Created collections retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve created collections: {e}"),
            )),
        ),
    }
}
