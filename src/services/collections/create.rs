use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{COLLECTION_NAME_MAX_CHARS, CollectionService};
use crate::models::{ApiResponse, ErrorCode, collections::requests::CreateCollectionRequest};
use crate::services::{is_unique_violation, require_user};
use crate::utils::validate::validate_title;

pub async fn create_collection(
    service: &CollectionService,
    request: &HttpRequest,
    req: CreateCollectionRequest,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = validate_title(&req.name, COLLECTION_NAME_MAX_CHARS) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_collection(user.id, req).await {
        Ok(collection) => {
            info!("Collection {} created by {}", collection.id, user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                collection,
                "Collection created successfully",
            )))
        }
        Err(e) if is_unique_violation(&e) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::CollectionNameExists, "Collection name already exists"),
        )),
        Err(e) => {
            error!("Collection creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Collection creation failed: {e}"),
                )),
            )
        }
    }
}
