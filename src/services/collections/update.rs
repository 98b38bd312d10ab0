use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{COLLECTION_NAME_MAX_CHARS, CollectionService};
use crate::models::{ApiResponse, ErrorCode, collections::requests::UpdateCollectionRequest};
use crate::services::{can_manage_collection, is_unique_violation, require_user};
use crate::utils::validate::validate_title;

pub async fn update_collection(
    service: &CollectionService,
    request: &HttpRequest,
    collection_id: i64,
    req: UpdateCollectionRequest,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Some(name) = &req.name
        && let Err(msg) = validate_title(name, COLLECTION_NAME_MAX_CHARS)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
    }

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

    // 只有创建者或管理员可以修改
    if !can_manage_collection(&user, &collection) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You do not have permission to modify this collection",
        )));
    }

    match storage.update_collection(collection_id, req).await {
        Ok(Some(collection)) => {
            info!("Collection {} updated by {}", collection_id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                collection,
                "Collection updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CollectionNotFound,
            "Collection not found",
        ))),
        Err(e) if is_unique_violation(&e) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::CollectionNameExists, "Collection name already exists"),
        )),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
