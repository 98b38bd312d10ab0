pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::videos::requests::{CreateVideoRequest, UpdateVideoRequest, VideoListParams};
use crate::storage::Storage;
use crate::utils::validate::{validate_duration, validate_title};

pub const VIDEO_TITLE_MAX_CHARS: usize = 100;

pub struct VideoService {
    storage: Option<Arc<dyn Storage>>,
}

impl VideoService {
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

    pub async fn list_videos(
        &self,
        request: &HttpRequest,
        query: VideoListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_videos(self, request, query).await
    }

    pub async fn create_video(
        &self,
        request: &HttpRequest,
        req: CreateVideoRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_video(self, request, req).await
    }

    // 视频详情，同时确保当前用户有一条播放记录
    pub async fn get_video(&self, request: &HttpRequest, video_id: i64) -> ActixResult<HttpResponse> {
        detail::get_video(self, request, video_id).await
    }

    pub async fn update_video(
        &self,
        request: &HttpRequest,
        video_id: i64,
        req: UpdateVideoRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_video(self, request, video_id, req).await
    }

    pub async fn delete_video(
        &self,
        request: &HttpRequest,
        video_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_video(self, request, video_id).await
    }
}

/// 标题与时长校验
fn validate_video_fields(title: Option<&str>, duration: Option<&str>) -> Result<(), String> {
    if let Some(title) = title {
        validate_title(title, VIDEO_TITLE_MAX_CHARS)?;
    }
    if let Some(duration) = duration {
        validate_duration(duration)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_video_fields() {
        assert!(validate_video_fields(Some("Intro"), Some("12:30")).is_ok());
        assert!(validate_video_fields(None, None).is_ok());
        assert!(validate_video_fields(Some("  "), None).is_err());
        assert!(validate_video_fields(Some("Intro"), Some("1:2")).is_err());
        assert!(validate_video_fields(Some("Intro"), Some("10:75")).is_err());
    }
}
