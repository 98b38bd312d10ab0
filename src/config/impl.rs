use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

const DEVELOPMENT_JWT_SECRET: &str = "videoone-development-secret";

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::with_defaults(Config::builder())?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("VIDEOONE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .with_list_parse_key("cors.allowed_methods")
                    .with_list_parse_key("cors.allowed_headers")
                    .with_list_parse_key("upload.allowed_types")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("cache.redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option(
                "cache.redis.key_prefix",
                std::env::var("REDIS_KEY_PREFIX").ok(),
            )?
            .set_override_option("cache.default_ttl", std::env::var("REDIS_TTL").ok())?
            .set_override_option("upload.dir", std::env::var("UPLOAD_DIR").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// 内置默认值，无配置文件时也能启动
    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("app.system_name", "VideoOne")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 10 * 1024 * 1024)?
            .set_default("jwt.secret", DEVELOPMENT_JWT_SECRET)?
            .set_default("jwt.access_token_expiry", 3600)?
            .set_default("jwt.leeway", 30)?
            .set_default("database.url", "sqlite://videoone.db?mode=rwc")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 30)?
            .set_default("cache.type", "moka")?
            .set_default("cache.default_ttl", 300)?
            .set_default("cache.redis.url", "redis://127.0.0.1:6379")?
            .set_default("cache.redis.key_prefix", "videoone:")?
            .set_default("cache.memory.max_capacity", 10_000)?
            .set_default("cors.allowed_origins", vec!["*"])?
            .set_default("cors.allowed_methods", vec!["GET", "POST", "PUT", "DELETE"])?
            .set_default(
                "cors.allowed_headers",
                vec!["Authorization", "Content-Type", "Accept"],
            )?
            .set_default("cors.max_age", 3600)?
            .set_default("upload.dir", "media")?
            .set_default("upload.max_size", 500 * 1024 * 1024)?
            .set_default("upload.allowed_types", Vec::<String>::new())
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 拒绝启动后才会暴露的错误配置
    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".into()));
        }
        if self.is_production() && self.jwt.secret == DEVELOPMENT_JWT_SECRET {
            return Err(ConfigError::Message(
                "jwt.secret must be changed in production".into(),
            ));
        }
        if self.upload.dir.trim().is_empty() {
            return Err(ConfigError::Message("upload.dir must not be empty".into()));
        }
        if !matches!(self.cache.cache_type.as_str(), "moka" | "redis") {
            tracing::warn!(
                "Unknown cache type '{}', Moka will be used",
                self.cache.cache_type
            );
        }
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }

    /// CORS 是否允许任意来源
    pub fn cors_allows_any_origin(&self) -> bool {
        self.cors.allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize_without_file() {
        let config = AppConfig::with_defaults(Config::builder())
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cache.cache_type, "moka");
        assert_eq!(config.upload.dir, "media");
        assert!(config.cors_allows_any_origin());
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_validate_rejects_default_secret_in_production() {
        let mut config = AppConfig::with_defaults(Config::builder())
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .unwrap();
        assert!(config.validate().is_ok());

        config.app.environment = "production".to_string();
        assert!(config.validate().is_err());

        config.jwt.secret = "a-real-secret".to_string();
        assert!(config.validate().is_ok());

        config.upload.dir = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::with_defaults(Config::builder())
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .unwrap();
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
    }
}
