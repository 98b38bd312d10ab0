use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 播放记录，每个 (用户, 视频) 至多一条
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/playback.ts")]
pub struct PlaybackStat {
    pub id: i64,
    pub video_id: i64,
    pub user_id: i64,
    // 0-100
    pub progress: i32,
    // 秒
    pub duration: i32,
    pub last_played_at: chrono::DateTime<chrono::Utc>,
}
