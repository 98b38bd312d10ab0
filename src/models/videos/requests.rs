use serde::Deserialize;
use ts_rs::TS;

/// 创建视频请求，url 为上传接口返回的相对路径
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct CreateVideoRequest {
    pub category_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
}

/// 更新视频请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct UpdateVideoRequest {
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
}

/// 视频列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct VideoListParams {
    pub category_id: Option<i64>,
}
