use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 合辑（课程）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/collection.ts")]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: i64,
    // 媒体目录下的相对路径
    pub thumbnail: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
