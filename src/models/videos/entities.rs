use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 视频
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct Video {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub description: Option<String>,
    // 媒体目录下的相对路径
    pub url: String,
    // MM:SS
    pub duration: String,
    pub duration_seconds: i64,
    pub thumbnail: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
