use serde::Deserialize;
use ts_rs::TS;

/// 创建分类请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CreateCategoryRequest {
    pub collection_id: i64,
    pub name: String,
    pub progress: Option<i32>,
}

/// 更新分类请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub progress: Option<i32>,
}

/// 分类列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CategoryListParams {
    pub collection_id: Option<i64>,
}
