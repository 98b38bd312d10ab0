pub mod categories;
pub mod collections;
pub mod files;
pub mod homeworks;
pub mod materials;
pub mod playback;
pub mod search;
pub mod stats;
pub mod system;
pub mod videos;

pub use categories::CategoryService;
pub use collections::CollectionService;
pub use files::FileService;
pub use homeworks::HomeworkService;
pub use materials::MaterialService;
pub use playback::PlaybackService;
pub use search::SearchService;
pub use stats::StatsService;
pub use system::SystemService;
pub use videos::VideoService;

use actix_web::{HttpRequest, HttpResponse};

use crate::errors::VideoOneError;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    collections::entities::Collection,
    users::entities::{User, UserRole},
};

/// 取出 RequireJWT 写入的当前用户，缺失时返回 401 响应
pub(crate) fn require_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "用户未登录",
        ))
    })
}

/// 合辑只能由创建者或管理员修改、删除
pub(crate) fn can_manage_collection(user: &User, collection: &Collection) -> bool {
    user.role == UserRole::Admin || collection.creator_id == user.id
}

// 三种数据库的唯一约束报错措辞不同
pub(crate) fn is_unique_violation(err: &VideoOneError) -> bool {
    let msg = err.message().to_lowercase();
    msg.contains("unique constraint") || msg.contains("duplicate")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: UserRole) -> User {
        User {
            id,
            username: format!("user{id}"),
            role,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn collection(creator_id: i64) -> Collection {
        Collection {
            id: 1,
            name: "Rust".to_string(),
            description: None,
            creator_id,
            thumbnail: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_can_manage_collection() {
        let owned = collection(7);
        assert!(can_manage_collection(&user(7, UserRole::Teacher), &owned));
        assert!(can_manage_collection(&user(1, UserRole::Admin), &owned));
        assert!(!can_manage_collection(&user(2, UserRole::Teacher), &owned));
        assert!(!can_manage_collection(&user(3, UserRole::User), &owned));
    }

    #[test]
    fn test_is_unique_violation() {
        assert!(is_unique_violation(&VideoOneError::database_operation(
            "创建合辑失败: UNIQUE constraint failed: collections.name"
        )));
        assert!(is_unique_violation(&VideoOneError::database_operation(
            "Duplicate entry 'Rust' for key 'name'"
        )));
        assert!(is_unique_violation(&VideoOneError::database_operation(
            "duplicate key value violates unique constraint \"idx\""
        )));
        assert!(!is_unique_violation(&VideoOneError::not_found("missing")));
    }
}
