use crate::models::playback::entities::PlaybackStat;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/playback.ts")]
pub struct PlaybackStatListResponse {
    pub items: Vec<PlaybackStat>,
}
