use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MaterialService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::media::remove_media_file;

pub async fn delete_material(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_material(material_id).await {
        Ok(Some(material)) => {
            remove_media_file(&AppConfig::get().upload.dir, &material.url).await;
            info!("Material {} deleted", material_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Material deleted successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MaterialNotFound,
            "Material not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
