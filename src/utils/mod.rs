pub mod extractor;
pub mod jwt;
pub mod media;
pub mod parameter_error_handler;
pub mod sql;
pub mod validate;

pub use extractor::{SafeCategoryIdI64, SafeIDI64};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::{escape_like_pattern, icontains};
