use crate::models::collections::entities::Collection;
use crate::models::homeworks::entities::Homework;
use crate::models::videos::entities::Video;
use serde::Serialize;
use ts_rs::TS;

/// 按名称/标题模糊匹配的结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub struct SearchResponse {
    pub collections: Vec<Collection>,
    pub videos: Vec<Video>,
    pub homeworks: Vec<Homework>,
}
