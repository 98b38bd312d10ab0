//! 媒体文件路径与清理
//!
//! 上传文件按 `{类别}/{YYYY}/{MM}/{uuid}_{原文件名}` 存放在上传目录下，
//! 数据库中只保存相对路径。

use chrono::{DateTime, Datelike, Utc};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error};

/// 媒体类别，对应上传目录下的一级子目录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    VideoThumbs,
    Materials,
    Videos,
}

impl MediaKind {
    /// 按 MIME 类型归类：图片为缩略图，application/* 为资料，其余视为视频
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("image") {
            MediaKind::VideoThumbs
        } else if content_type.starts_with("application") {
            MediaKind::Materials
        } else {
            MediaKind::Videos
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            MediaKind::VideoThumbs => "video_thumbs",
            MediaKind::Materials => "materials",
            MediaKind::Videos => "videos",
        }
    }
}

/// 去掉路径分隔符等危险字符，只保留文件名部分
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

/// 生成上传文件的相对路径
pub fn build_relative_path(
    kind: MediaKind,
    original_name: &str,
    now: DateTime<Utc>,
    unique: &str,
) -> String {
    format!(
        "{}/{:04}/{:02}/{}_{}",
        kind.dir_name(),
        now.year(),
        now.month(),
        unique,
        sanitize_file_name(original_name)
    )
}

/// 相对路径解析到上传目录下，拒绝越出上传目录的路径
pub fn resolve_media_path(upload_dir: &str, relative: &str) -> Option<PathBuf> {
    let rel = Path::new(relative);
    if rel.is_absolute()
        || rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }
    Some(Path::new(upload_dir).join(rel))
}

/// 删除数据库记录引用的媒体文件，文件不存在时忽略
pub async fn remove_media_file(upload_dir: &str, relative: &str) {
    if relative.is_empty() {
        return;
    }
    let Some(path) = resolve_media_path(upload_dir, relative) else {
        error!("Refusing to remove media outside upload dir: {}", relative);
        return;
    };

    match tokio::fs::remove_file(&path).await {
        Ok(()) => debug!("Removed media file {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => error!("Failed to remove media file {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_from_content_type() {
        assert_eq!(MediaKind::from_content_type("image/png"), MediaKind::VideoThumbs);
        assert_eq!(MediaKind::from_content_type("application/pdf"), MediaKind::Materials);
        assert_eq!(MediaKind::from_content_type("video/mp4"), MediaKind::Videos);
        assert_eq!(MediaKind::from_content_type(""), MediaKind::Videos);
    }

    #[test]
    fn test_build_relative_path() {
        let now = Utc.with_ymd_and_hms(2025, 3, 7, 10, 0, 0).unwrap();
        let path = build_relative_path(MediaKind::Videos, "lesson 1.mp4", now, "abc123");
        assert_eq!(path, "videos/2025/03/abc123_lesson 1.mp4");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\tmp\\a.pdf"), "a.pdf");
        assert_eq!(sanitize_file_name(".."), "file");
        assert_eq!(sanitize_file_name("..hidden"), "hidden");
    }

    #[test]
    fn test_resolve_media_path() {
        assert_eq!(
            resolve_media_path("media", "videos/2025/03/a.mp4"),
            Some(PathBuf::from("media/videos/2025/03/a.mp4"))
        );
        assert!(resolve_media_path("media", "../secret").is_none());
        assert!(resolve_media_path("media", "/etc/passwd").is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_file_is_noop() {
        remove_media_file("media-does-not-exist", "videos/none.mp4").await;
    }
}
