use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CategoryService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::media::remove_media_file;

pub async fn delete_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_category(category_id).await {
        Ok(Some(media)) => {
            let upload_dir = &AppConfig::get().upload.dir;
            for path in &media {
                remove_media_file(upload_dir, path).await;
            }
            info!("Category {} deleted", category_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Category deleted successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CategoryNotFound,
            "Category not found",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
