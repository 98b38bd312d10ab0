use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 内存缓存，其他后端不可用时使用
const FALLBACK_CACHE: &str = "moka";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 依次尝试的缓存后端：配置值在前，Moka 兜底
fn cache_candidates(configured: &str) -> Vec<&str> {
    if configured == FALLBACK_CACHE {
        vec![FALLBACK_CACHE]
    } else {
        vec![configured, FALLBACK_CACHE]
    }
}

/// 创建缓存实例
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let configured = AppConfig::get().cache.cache_type.as_str();

    for name in cache_candidates(configured) {
        let Some(constructor) = get_object_cache_plugin(name) else {
            warn!("Cache backend '{}' not found in registry", name);
            continue;
        };

        match constructor().await {
            Ok(cache) => {
                if name != configured {
                    warn!("Falling back to {} cache backend", name);
                }
                warn!("Using {} cache backend", name);
                return Ok(Arc::from(cache));
            }
            Err(e) => warn!("Failed to create {} cache: {}", name, e),
        }
    }

    Err(format!("No cache backend available (configured: {configured})").into())
}

/// 确保媒体上传目录存在
fn ensure_upload_dir() -> std::io::Result<()> {
    let config = AppConfig::get();
    std::fs::create_dir_all(&config.upload.dir)?;
    info!("Media directory ready: {}", config.upload.dir);
    Ok(())
}

/// 准备服务器启动的上下文
/// 包括存储、媒体目录和缓存
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    debug!(
        "Registered cache backends: {:?}",
        crate::cache::register::registered_object_cache_plugins()
    );

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    ensure_upload_dir().expect("Failed to create media directory");

    let cache = create_cache().await.expect("Failed to create cache");

    StartupContext { storage, cache }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_candidates() {
        assert_eq!(cache_candidates("redis"), ["redis", "moka"]);
        assert_eq!(cache_candidates("moka"), ["moka"]);
        assert_eq!(cache_candidates("memcached"), ["memcached", "moka"]);
    }
}
