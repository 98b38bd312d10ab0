use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::time::Duration;
use tracing::{debug, warn};

// 从 lib.rs 导入模块
use rust_videoone::config::AppConfig;
use rust_videoone::models::AppStartTime;
use rust_videoone::routes;
use rust_videoone::runtime::lifetime;
use rust_videoone::utils::{json_error_handler, query_error_handler};

/// 按配置构建 CORS，`*` 表示不限来源
fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default().max_age(config.cors.max_age);

    if config.cors_allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.cors.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    if config.cors.allowed_methods.is_empty() {
        cors = cors.allow_any_method();
    } else {
        cors = cors.allowed_methods(config.cors.allowed_methods.iter().map(String::as_str));
    }

    if config.cors.allowed_headers.is_empty() {
        cors.allow_any_header()
    } else {
        cors.allowed_headers(config.cors.allowed_headers.iter().map(String::as_str))
    }
}

/// 初始化日志，返回的 guard 需存活到进程退出
fn init_tracing(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_level(true)
                .with_ansi(true),
        );

    // 开发环境带源码位置，其余输出 JSON
    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }
    guard
}

/// 监听目标：配置了 Unix 套接字时优先使用
enum ListenTarget {
    #[cfg(unix)]
    UnixSocket(String),
    Tcp(String),
}

fn listen_target(config: &AppConfig) -> ListenTarget {
    #[cfg(unix)]
    if let Some(socket_path) = config.unix_socket_path() {
        return ListenTarget::UnixSocket(socket_path.to_string());
    }
    ListenTarget::Tcp(config.server_bind_address())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();
    let _log_guard = init_tracing(config);

    warn!(
        "{} v{} starting ({} environment)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let lifetime::startup::StartupContext { storage, cache } =
        lifetime::startup::prepare_server_startup().await;

    debug!(
        "Startup preparation took {} ms, {} workers",
        (chrono::Utc::now() - app_start_time.start_datetime).num_milliseconds(),
        config.server.workers
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(cache.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(routes::configure_api_routes)
    })
    .workers(config.server.workers)
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ));

    let server = match listen_target(config) {
        #[cfg(unix)]
        ListenTarget::UnixSocket(path) => {
            warn!("Listening on Unix socket {}", path);
            if std::path::Path::new(&path).exists() {
                std::fs::remove_file(&path)?;
            }
            server.bind_uds(path)?
        }
        ListenTarget::Tcp(address) => {
            warn!("Listening on http://{}", address);
            server.bind(address)?
        }
    }
    .run();

    tokio::select! {
        res = server => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Shutdown signal handled, exiting");
        }
    }

    Ok(())
}
