use crate::models::categories::entities::Category;
use crate::models::homeworks::entities::Homework;
use crate::models::materials::entities::Material;
use crate::models::videos::entities::Video;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CategoryListResponse {
    pub items: Vec<Category>,
}

/// 分类下的全部学习资源
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CategoryResourcesResponse {
    pub videos: Vec<Video>,
    pub homeworks: Vec<Homework>,
    pub materials: Vec<Material>,
}
