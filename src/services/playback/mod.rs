pub mod list;
pub mod progress;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::playback::requests::UpdateProgressRequest;
use crate::storage::Storage;

pub struct PlaybackService {
    storage: Option<Arc<dyn Storage>>,
}

impl PlaybackService {
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

    // 上报播放进度，进度只增不减
    pub async fn update_progress(
        &self,
        request: &HttpRequest,
        req: UpdateProgressRequest,
    ) -> ActixResult<HttpResponse> {
        progress::update_progress(self, request, req).await
    }

    pub async fn list_playback_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_playback_stats(self, request).await
    }
}
