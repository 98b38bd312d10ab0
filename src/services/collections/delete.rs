use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CollectionService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{can_manage_collection, require_user};
use crate::utils::media::remove_media_file;

pub async fn delete_collection(
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

    if !can_manage_collection(&user, &collection) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You do not have permission to delete this collection",
        )));
    }

    match storage.delete_collection(collection_id).await {
        Ok(Some(media)) => {
            let upload_dir = &AppConfig::get().upload.dir;
            for path in &media {
                remove_media_file(upload_dir, path).await;
            }
            info!(
                "Collection {} deleted by {}, {} media files removed",
                collection_id,
                user.id,
                media.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Collection deleted successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CollectionNotFound,
            "Collection not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
