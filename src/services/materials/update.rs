use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{MATERIAL_TITLE_MAX_CHARS, MaterialService, validate_url};
use crate::models::{ApiResponse, ErrorCode, materials::requests::UpdateMaterialRequest};
use crate::utils::validate::validate_title;

pub async fn update_material(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: i64,
    req: UpdateMaterialRequest,
) -> ActixResult<HttpResponse> {
    let checked = req
        .title
        .as_deref()
        .map_or(Ok(()), |t| validate_title(t, MATERIAL_TITLE_MAX_CHARS))
        .and_then(|_| req.url.as_deref().map_or(Ok(()), validate_url));
    if let Err(msg) = checked {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg)));
    }

    let storage = service.get_storage(request);

    if let Some(category_id) = req.category_id {
        match storage.get_category_by_id(category_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::CategoryNotFound,
                    "Category not found",
                )));
            }
            Err(e) => return Ok(ApiResponse::from_error(&e)),
        }
    }

    match storage.update_material(material_id, req).await {
        Ok(Some(material)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            material,
            "Material updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MaterialNotFound,
            "Material not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
