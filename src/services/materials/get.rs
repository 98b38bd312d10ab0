use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_material(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_material_by_id(material_id).await {
        Ok(Some(material)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            material,
            "Material retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MaterialNotFound,
            "Material not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
