use serde::Serialize;

/// 响应信封中的业务错误码
///
/// 0 表示成功，1xxx 为通用错误，2xxx 按资源划分。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InvalidInput = 1005,
    InternalServerError = 1500,

    // 合辑
    CollectionNotFound = 2001,
    CollectionNameExists = 2002,

    // 分类
    CategoryNotFound = 2101,

    // 视频
    VideoNotFound = 2201,

    // 学习资料
    MaterialNotFound = 2301,

    // 作业与题目
    HomeworkNotFound = 2401,
    QuestionNotFound = 2402,

    // 文件
    FileUploadFailed = 2501,
    FileTypeNotAllowed = 2502,
    FileSizeExceeded = 2503,
    FileNotFound = 2504,
    MultifileUploadNotAllowed = 2505,
}

impl ErrorCode {
    /// 存储/服务错误对应的通用错误码
    pub fn from_error(err: &crate::errors::VideoOneError) -> Self {
        use crate::errors::VideoOneError;
        match err {
            VideoOneError::NotFound(_) => ErrorCode::NotFound,
            VideoOneError::Validation(_) | VideoOneError::InvalidInput(_) => {
                ErrorCode::InvalidInput
            }
            VideoOneError::Authorization(_) => ErrorCode::Forbidden,
            VideoOneError::Authentication(_) => ErrorCode::Unauthorized,
            _ => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VideoOneError;

    #[test]
    fn test_codes_cast() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::HomeworkNotFound as i32, 2401);
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            ErrorCode::from_error(&VideoOneError::not_found("q")),
            ErrorCode::NotFound
        );
        assert_eq!(
            ErrorCode::from_error(&VideoOneError::validation("v")),
            ErrorCode::InvalidInput
        );
        assert_eq!(
            ErrorCode::from_error(&VideoOneError::database_operation("d")),
            ErrorCode::InternalServerError
        );
    }
}
