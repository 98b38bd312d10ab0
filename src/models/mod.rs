//! 数据模型定义
//!
//! 业务实体、请求与响应结构，通过 ts-rs 导出前端类型。

pub mod categories;
pub mod collections;
pub mod common;
pub mod files;
pub mod homeworks;
pub mod materials;
pub mod playback;
pub mod search;
pub mod stats;
pub mod system;
pub mod users;
pub mod videos;

pub use common::*;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
