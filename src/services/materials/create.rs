use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{MATERIAL_TITLE_MAX_CHARS, MaterialService, validate_url};
use crate::models::{ApiResponse, ErrorCode, materials::requests::CreateMaterialRequest};
use crate::utils::validate::validate_title;

pub async fn create_material(
    service: &MaterialService,
    request: &HttpRequest,
    req: CreateMaterialRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) =
        validate_title(&req.title, MATERIAL_TITLE_MAX_CHARS).and_then(|_| validate_url(&req.url))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
    }

    let storage = service.get_storage(request);

    match storage.get_category_by_id(req.category_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CategoryNotFound,
                "Category not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    }

    match storage.create_material(req).await {
        Ok(material) => {
            info!(
                "Material {} created in category {}",
                material.id, material.category_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                material,
                "Material created successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
