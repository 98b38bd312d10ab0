use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学习资料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct Material {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub date: chrono::DateTime<chrono::Utc>,
}
