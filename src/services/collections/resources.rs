use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CollectionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::require_user;

/// 分类资源只对管理人员、合辑创建者和收藏了该合辑的用户开放
pub async fn get_category_resources(
    service: &CollectionService,
    request: &HttpRequest,
    collection_id: i64,
    category_id: i64,
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

    match storage.get_category_by_id(category_id).await {
        Ok(Some(category)) if category.collection_id == collection_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CategoryNotFound,
                "Category not found in this collection",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    }

    let allowed = if user.role.is_staff() || collection.creator_id == user.id {
        true
    } else {
        match storage.is_favorited(user.id, collection_id).await {
            Ok(flag) => flag,
            Err(e) => return Ok(ApiResponse::from_error(&e)),
        }
    };

    if !allowed {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Favorite this collection to access its resources",
        )));
    }

    match storage.get_category_resources(category_id).await {
        Ok(resources) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            resources,
            "Category resources retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
