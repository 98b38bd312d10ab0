use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

/// Redis 缓存，键统一加上配置的前缀
pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisObjectCache {
    /// 按配置连接并 PING 一次，失败时由启动流程回退到 Moka
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let client = redis::Client::open(redis_config.url.as_str())
            .map_err(|e| format!("Invalid Redis URL {}: {e}", redis_config.url))?;

        let mut conn = client.get_connection().map_err(|e| {
            error!("Cannot connect to Redis at {}: {}", redis_config.url, e);
            format!("Redis connection failed: {e}")
        })?;
        let pong: String = redis::cmd("PING")
            .query(&mut conn)
            .map_err(|e| format!("Redis ping failed: {e}"))?;
        debug!("Redis answered {} at {}", pong, redis_config.url);

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        })
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                None
            }
        }
    }

    fn make_key(&self, key: &str) -> String {
        prefixed_key(&self.key_prefix, key)
    }
}

fn prefixed_key(prefix: &str, key: &str) -> String {
    format!("{prefix}{key}")
}

/// ttl 为 0 时回落到默认 TTL
fn effective_ttl(ttl: u64, default_ttl: u64) -> u64 {
    if ttl == 0 { default_ttl } else { ttl }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let Some(mut conn) = self.connection().await else {
            return CacheResult::ExistsButNoValue;
        };

        match conn.get::<_, Option<String>>(self.make_key(key)).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Failed to get key '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        let ttl = effective_ttl(ttl, self.default_ttl);
        if let Err(e) = conn
            .set_ex::<_, _, ()>(self.make_key(&key), value, ttl)
            .await
        {
            error!("Failed to insert key '{}' into cache: {}", key, e);
        } else {
            debug!("Cached {} for {}s", key, ttl);
        }
    }

    async fn remove(&self, key: &str) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        if let Err(e) = conn.del::<_, i64>(self.make_key(key)).await {
            error!("Failed to remove key '{}': {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        // 只清理本服务前缀下的键
        let pattern = prefixed_key(&self.key_prefix, "*");
        let keys: Vec<String> = match conn.keys(pattern.as_str()).await {
            Ok(keys) => keys,
            Err(e) => {
                error!("Failed to list keys matching '{}': {}", pattern, e);
                return;
            }
        };

        if keys.is_empty() {
            return;
        }

        match conn.del::<_, i64>(keys).await {
            Ok(count) => warn!("Invalidated {} keys with prefix '{}'", count, self.key_prefix),
            Err(e) => error!("Failed to invalidate keys with prefix '{}': {}", self.key_prefix, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_key() {
        assert_eq!(prefixed_key("videoone:", "user:abc"), "videoone:user:abc");
        assert_eq!(prefixed_key("", "k"), "k");
    }

    #[test]
    fn test_effective_ttl() {
        assert_eq!(effective_ttl(0, 300), 300);
        assert_eq!(effective_ttl(60, 300), 60);
    }
}
