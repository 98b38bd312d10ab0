use crate::models::categories::entities::Category;
use crate::models::collections::entities::Collection;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/collection.ts")]
pub struct CollectionListResponse {
    pub items: Vec<Collection>,
    pub pagination: PaginationInfo,
}

/// 合辑详情：附带分类列表与当前用户的收藏状态
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/collection.ts")]
pub struct CollectionDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub collection: Collection,
    pub categories: Vec<Category>,
    pub is_favorited: bool,
}

/// 合辑内当前用户的视频观看统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/collection.ts")]
pub struct VideoStatsResponse {
    pub total: i64,
    pub completed: i64,   // 进度 >= 100
    pub in_progress: i64, // 0 < 进度 < 100
    pub not_started: i64, // 其余视频
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/collection.ts")]
pub struct FavoriteStatusResponse {
    pub collection_id: i64,
    pub is_favorited: bool,
}
