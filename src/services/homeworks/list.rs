use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::{
    ApiResponse, ErrorCode,
    homeworks::{requests::HomeworkListParams, responses::HomeworkListResponse},
};

pub async fn list_homeworks(
    service: &HomeworkService,
    request: &HttpRequest,
    query: HomeworkListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_homeworks(query.category_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            HomeworkListResponse { items },
            "Homework list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve homework list: {e}"),
            )),
        ),
    }
}
