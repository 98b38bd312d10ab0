use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use super::FileService;
use crate::errors::VideoOneError;
use crate::models::{ApiResponse, ErrorCode, files::responses::FileUploadResponse};
use crate::utils::media::{MediaKind, build_relative_path, remove_media_file, resolve_media_path};

/// 允许列表为空时不限制；条目可以是 MIME 类型或 `.ext` 形式的扩展名
pub fn is_type_allowed(allowed_types: &[String], content_type: &str, file_name: &str) -> bool {
    if allowed_types.is_empty() {
        return true;
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    allowed_types.iter().any(|t| {
        let t = t.to_lowercase();
        if t.starts_with('.') {
            !extension.is_empty() && t == extension
        } else {
            t == content_type.to_lowercase()
        }
    })
}

pub async fn handle_upload(
    service: &FileService,
    _req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;

    // 文件相关信息
    let mut original_name = String::new();
    let mut relative_path = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut file_type = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != "file" {
            continue;
        }

        if file_uploaded {
            remove_media_file(upload_dir, &relative_path).await;
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::MultifileUploadNotAllowed,
                "Only one file can be uploaded at a time",
            )));
        }
        file_uploaded = true;

        original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        file_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        if !is_type_allowed(&config.upload.allowed_types, &file_type, &original_name) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileTypeNotAllowed,
                "File type not allowed",
            )));
        }

        let kind = MediaKind::from_content_type(&file_type);
        relative_path = build_relative_path(
            kind,
            &original_name,
            chrono::Utc::now(),
            &Uuid::new_v4().simple().to_string(),
        );

        let Some(file_path) = resolve_media_path(upload_dir, &relative_path) else {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                "Invalid file name",
            )));
        };

        if let Some(parent) = file_path.parent()
            && let Err(e) = tokio::fs::create_dir_all(parent).await
        {
            tracing::error!("{}", VideoOneError::file_operation(format!("{e}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    "创建上传目录失败",
                )),
            );
        }

        let mut f = match tokio::fs::File::create(&file_path).await {
            Ok(file) => file,
            Err(e) => {
                tracing::error!("{}", VideoOneError::file_operation(format!("{e}")));
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::FileUploadFailed,
                        "文件创建失败",
                    )),
                );
            }
        };

        let mut total_size: usize = 0;
        while let Some(chunk) = field.next().await {
            let data = match chunk {
                Ok(data) => data,
                Err(e) => {
                    drop(f);
                    remove_media_file(upload_dir, &relative_path).await;
                    return Err(e.into());
                }
            };

            total_size += data.len();
            // 校验大小
            if total_size > max_size {
                drop(f);
                remove_media_file(upload_dir, &relative_path).await;
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileSizeExceeded,
                    "File size exceeds the limit",
                )));
            }

            if let Err(e) = f.write_all(&data).await {
                tracing::error!("{}", VideoOneError::file_operation(format!("{e}")));
                drop(f);
                remove_media_file(upload_dir, &relative_path).await;
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::FileUploadFailed,
                        "文件写入失败",
                    )),
                );
            }
        }

        if let Err(e) = f.flush().await {
            tracing::error!("{}", VideoOneError::file_operation(format!("{e}")));
        }
        file_size = total_size as i64;
    }

    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    }

    tracing::info!("Stored upload {} ({} bytes)", relative_path, file_size);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        FileUploadResponse {
            url: relative_path,
            file_name: original_name,
            size: file_size,
            content_type: file_type,
            uploaded_at: chrono::Utc::now(),
        },
        "File uploaded successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_allow_list_accepts_everything() {
        assert!(is_type_allowed(&[], "video/mp4", "lesson.mp4"));
    }

    #[test]
    fn test_mime_and_extension_entries() {
        let allowed = vec!["video/mp4".to_string(), ".PDF".to_string()];
        assert!(is_type_allowed(&allowed, "video/mp4", "a.bin"));
        assert!(is_type_allowed(&allowed, "application/octet-stream", "notes.pdf"));
        assert!(!is_type_allowed(&allowed, "image/png", "cover.png"));
        assert!(!is_type_allowed(&allowed, "image/png", "no_extension"));
    }
}
