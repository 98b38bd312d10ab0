use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SearchService;
use crate::models::{
    ApiResponse,
    search::{requests::SearchParams, responses::SearchResponse},
};

/// 关键字为空时直接返回空结果
pub async fn search(
    service: &SearchService,
    request: &HttpRequest,
    params: SearchParams,
) -> ActixResult<HttpResponse> {
    let keyword = params.q.trim();
    if keyword.is_empty() {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            SearchResponse {
                collections: Vec::new(),
                videos: Vec::new(),
                homeworks: Vec::new(),
            },
            "Search completed",
        )));
    }

    let storage = service.get_storage(request);
    match storage.search(keyword).await {
        Ok(results) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            results,
            "Search completed",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
