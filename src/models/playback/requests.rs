use serde::Deserialize;
use ts_rs::TS;

/// 上报播放进度
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/playback.ts")]
pub struct UpdateProgressRequest {
    #[serde(rename = "videoId")]
    pub video_id: i64,
    pub progress: i32,
    pub duration: i32,
}
