use crate::models::playback::entities::PlaybackStat;
use crate::models::videos::entities::Video;
use serde::Serialize;
use ts_rs::TS;

/// 视频详情与当前用户的播放记录
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct VideoDetailResponse {
    pub video: Video,
    pub playback: PlaybackStat,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct VideoListResponse {
    pub items: Vec<Video>,
}
