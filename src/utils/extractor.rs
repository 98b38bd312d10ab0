//! 路径参数提取器
//!
//! 将路径中的数字 ID 解析为 i64，解析失败时直接返回 400 响应信封。

use actix_web::{HttpRequest, HttpResponse, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

/// 从路径中读取并解析 i64 参数
pub fn parse_i64_param(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => {
            let message = format!("Invalid path parameter '{name}': '{raw}'");
            let response = HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
            Err(InternalError::from_response(message, response).into())
        }
    }
}

/// 定义一个按名称提取路径 ID 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                std::future::ready($crate::utils::extractor::parse_i64_param(req, $param).map($name))
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeCategoryIdI64, "category_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_valid_id() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        assert_eq!(parse_i64_param(&req, "id").unwrap(), 42);
    }

    #[test]
    fn test_parse_invalid_id() {
        let req = TestRequest::default().param("id", "abc").to_http_request();
        assert!(parse_i64_param(&req, "id").is_err());

        let req = TestRequest::default().param("id", "-1").to_http_request();
        assert!(parse_i64_param(&req, "id").is_err());

        let req = TestRequest::default().to_http_request();
        assert!(parse_i64_param(&req, "id").is_err());
    }
}
