use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 进程内缓存，也是其他缓存后端不可用时的回退
pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Ok(Self::with_settings(
            config.cache.memory.max_capacity,
            config.cache.default_ttl,
        ))
    }

    /// 指定容量与全局 TTL (秒) 创建
    pub fn with_settings(max_capacity: u64, ttl: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, TTL: {}s",
            max_capacity, ttl
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // 条目统一使用创建时设置的 TTL
        self.inner.insert(key, value).await;
        if ttl != 0 {
            debug!("Moka cache ignores per-item TTL, using global TTL configuration");
        }
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_settings(100, 60);

        assert_eq!(cache.get_raw("user:a").await, CacheResult::NotFound);

        cache
            .insert_raw("user:a".to_string(), "{\"id\":1}".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_raw("user:a").await,
            CacheResult::Found("{\"id\":1}".to_string())
        );

        cache.remove("user:a").await;
        assert_eq!(cache.get_raw("user:a").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_json_helpers() {
        let cache: Box<dyn ObjectCache> = Box::new(MokaCacheWrapper::with_settings(100, 60));

        cache
            .insert_json("nums".to_string(), &vec![1, 2, 3], 0)
            .await;
        assert_eq!(
            cache.get_json::<Vec<i32>>("nums").await,
            CacheResult::Found(vec![1, 2, 3])
        );

        cache
            .insert_raw("broken".to_string(), "not json".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_json::<Vec<i32>>("broken").await,
            CacheResult::ExistsButNoValue
        );
    }
}
