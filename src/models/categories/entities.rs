use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 合辑下的分类（章节）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct Category {
    pub id: i64,
    pub collection_id: i64,
    pub name: String,
    pub progress: i32,
}
