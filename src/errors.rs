//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_videoone_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum VideoOneError {
            $($variant(String),)*
        }

        impl VideoOneError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(VideoOneError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(VideoOneError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(VideoOneError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl VideoOneError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        VideoOneError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_videoone_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    InvalidInput("E010", "Invalid Input"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
}

impl VideoOneError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            VideoOneError::NotFound(_) => StatusCode::NOT_FOUND,
            VideoOneError::Validation(_) | VideoOneError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            VideoOneError::Authorization(_) => StatusCode::FORBIDDEN,
            VideoOneError::Authentication(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for VideoOneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for VideoOneError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for VideoOneError {
    fn from(err: sea_orm::DbErr) -> Self {
        VideoOneError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for VideoOneError {
    fn from(err: std::io::Error) -> Self {
        VideoOneError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for VideoOneError {
    fn from(err: serde_json::Error) -> Self {
        VideoOneError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VideoOneError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_error_codes() {
        assert_eq!(VideoOneError::cache_connection("test").code(), "E001");
        assert_eq!(VideoOneError::database_config("test").code(), "E003");
        assert_eq!(VideoOneError::validation("test").code(), "E007");
        assert_eq!(VideoOneError::authentication("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            VideoOneError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            VideoOneError::not_found("test").error_type(),
            "Resource Not Found"
        );
    }

    #[test]
    fn test_error_message() {
        let err = VideoOneError::not_found("Question 42 not found");
        assert_eq!(err.message(), "Question 42 not found");
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            VideoOneError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            VideoOneError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            VideoOneError::invalid_input("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            VideoOneError::authorization("x").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            VideoOneError::authentication("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            VideoOneError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_db_err() {
        let err: VideoOneError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_format_simple() {
        let err = VideoOneError::validation("Invalid duration");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid duration"));
    }
}
