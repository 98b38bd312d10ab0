use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::CollectionService;
use crate::models::{ApiResponse, ErrorCode, collections::responses::FavoriteStatusResponse};
use crate::services::require_user;

pub async fn list_favorites(
    service: &CollectionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.list_favorite_collections(user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            items,
            "Favorite collections retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}

/// 收藏或取消收藏，重复操作结果相同
pub async fn set_favorite(
    service: &CollectionService,
    request: &HttpRequest,
    collection_id: i64,
    favorite: bool,
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

    let result = if favorite {
        storage.add_favorite(user.id, collection_id).await
    } else {
        storage.remove_favorite(user.id, collection_id).await
    };

    match result {
        Ok(()) => {
            debug!(
                "User {} set favorite={} on collection {}",
                user.id, favorite, collection_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FavoriteStatusResponse {
                    collection_id,
                    is_favorited: favorite,
                },
                if favorite {
                    "Collection favorited"
                } else {
                    "Collection unfavorited"
                },
            )))
        }
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
