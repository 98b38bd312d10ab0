use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

/// 创建合辑请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/collection.ts")]
pub struct CreateCollectionRequest {
    pub name: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// 更新合辑请求（部分更新）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/collection.ts")]
pub struct UpdateCollectionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

/// 合辑列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/collection.ts")]
pub struct CollectionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct CollectionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub creator_id: Option<i64>,
    pub search: Option<String>,
}
