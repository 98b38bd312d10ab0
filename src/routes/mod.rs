pub mod categories;

pub mod collections;

pub mod files;

pub mod homeworks;

pub mod materials;

pub mod playback;

pub mod search;

pub mod system;

pub mod videos;

pub use categories::configure_categories_routes;
pub use collections::configure_collections_routes;
pub use files::configure_file_routes;
pub use homeworks::configure_homeworks_routes;
pub use materials::configure_materials_routes;
pub use playback::configure_playback_routes;
pub use search::configure_search_routes;
pub use system::configure_system_routes;
pub use videos::configure_videos_routes;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut actix_web::web::ServiceConfig) {
    configure_system_routes(cfg);
    configure_collections_routes(cfg);
    configure_categories_routes(cfg);
    configure_videos_routes(cfg);
    configure_materials_routes(cfg);
    configure_homeworks_routes(cfg);
    configure_playback_routes(cfg);
    configure_search_routes(cfg);
    configure_file_routes(cfg);
}
