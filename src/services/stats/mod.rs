pub mod aggregate;
pub mod course_scores;
pub mod favorites;
pub mod progress;
pub mod video_stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

/// 课程维度的统计：进度排行、观看情况、成绩
pub struct StatsService {
    storage: Option<Arc<dyn Storage>>,
}

impl StatsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn progress_stats(
        &self,
        request: &HttpRequest,
        collection_id: i64,
    ) -> ActixResult<HttpResponse> {
        progress::progress_stats(self, request, collection_id).await
    }

    pub async fn video_stats(
        &self,
        request: &HttpRequest,
        collection_id: i64,
    ) -> ActixResult<HttpResponse> {
        video_stats::video_stats(self, request, collection_id).await
    }

    pub async fn course_scores(
        &self,
        request: &HttpRequest,
        collection_id: i64,
    ) -> ActixResult<HttpResponse> {
        course_scores::course_scores(self, request, collection_id).await
    }

    pub async fn favorite_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        favorites::favorite_stats(self, request).await
    }
}
