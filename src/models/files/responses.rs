use serde::Serialize;
use ts_rs::TS;

/// 上传结果
#[derive(Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileUploadResponse {
    /// 媒体目录下的相对路径，可直接写入视频/资料/合辑的 url 字段
    pub url: String,
    /// 原始文件名
    pub file_name: String,
    /// 文件大小(字节)
    pub size: i64,
    /// 文件类型
    pub content_type: String,
    /// 上传时间
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
