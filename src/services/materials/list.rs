use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::models::{
    ApiResponse, ErrorCode,
    materials::{requests::MaterialListParams, responses::MaterialListResponse},
};

pub async fn list_materials(
    service: &MaterialService,
    request: &HttpRequest,
    query: MaterialListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_materials(query.category_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MaterialListResponse { items },
            "Material list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve material list: {e}"),
            )),
        ),
    }
}
