//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod categories;
pub mod collections;
pub mod favorite_collections;
pub mod homeworks;
pub mod materials;
pub mod playback_stats;
pub mod questions;
pub mod scores;
pub mod users;
pub mod videos;

use chrono::{DateTime, Utc};

/// unix 秒转为 UTC 时间
pub(crate) fn ts_to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
