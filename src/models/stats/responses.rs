use crate::models::homeworks::entities::Score;
use crate::models::playback::entities::PlaybackStat;
use crate::models::videos::entities::Video;
use serde::Serialize;
use ts_rs::TS;

/// 单个学员在课程中的完成度
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct LearnerProgress {
    pub user_id: i64,
    pub username: String,
    // 百分比，未取整
    pub progress: f64,
}

/// 饼图分段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct PieSlice {
    pub value: i64,
    pub name: String,
}

/// 课程学习进度统计
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct CourseProgressStats {
    pub top_10: Vec<LearnerProgress>,
    pub bottom_10: Vec<LearnerProgress>,
    pub pie_data: Vec<PieSlice>,
}

/// 收藏课程下的播放记录与视频
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct FavoriteCourseStatsResponse {
    pub playback_stats: Vec<PlaybackStat>,
    pub videos: Vec<Video>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct CourseScoresResponse {
    pub items: Vec<Score>,
}
