//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod categories;
mod collections;
mod homeworks;
mod materials;
mod playback_stats;
mod questions;
mod scores;
mod search;
mod users;
mod videos;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, VideoOneError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database.url, &config.database).await
    }

    /// 连接指定数据库并运行迁移
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = Self::is_sqlite_memory(url);

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| VideoOneError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("wal_autocheckpoint", "1000");

        // 内存库只存在于单个连接中，不能被回收
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size.max(1))
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| VideoOneError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(config.pool_size.min(5))
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| VideoOneError::database_connection(format!("无法连接到数据库: {e}")))
    }

    fn is_sqlite_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(VideoOneError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    categories::{
        entities::Category,
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        responses::CategoryResourcesResponse,
    },
    collections::{
        entities::Collection,
        requests::{CollectionListQuery, CreateCollectionRequest, UpdateCollectionRequest},
        responses::CollectionListResponse,
    },
    homeworks::{
        entities::{Homework, Question, Score},
        requests::{CreateHomeworkRequest, QuestionInput, UpdateHomeworkRequest},
    },
    materials::{
        entities::Material,
        requests::{CreateMaterialRequest, UpdateMaterialRequest},
    },
    playback::entities::PlaybackStat,
    search::responses::SearchResponse,
    stats::entities::CourseProgressRecord,
    users::entities::{User, UserRole},
    videos::{
        entities::Video,
        requests::{CreateVideoRequest, UpdateVideoRequest},
    },
};
use crate::storage::{MediaPaths, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn sync_user(&self, id: i64, username: &str, role: UserRole) -> Result<User> {
        self.sync_user_impl(id, username, role).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    // 合辑模块
    async fn create_collection(
        &self,
        creator_id: i64,
        collection: CreateCollectionRequest,
    ) -> Result<Collection> {
        self.create_collection_impl(creator_id, collection).await
    }

    async fn get_collection_by_id(&self, collection_id: i64) -> Result<Option<Collection>> {
        self.get_collection_by_id_impl(collection_id).await
    }

    async fn list_collections_with_pagination(
        &self,
        query: CollectionListQuery,
    ) -> Result<CollectionListResponse> {
        self.list_collections_with_pagination_impl(query).await
    }

    async fn update_collection(
        &self,
        collection_id: i64,
        update: UpdateCollectionRequest,
    ) -> Result<Option<Collection>> {
        self.update_collection_impl(collection_id, update).await
    }

    async fn delete_collection(&self, collection_id: i64) -> Result<Option<MediaPaths>> {
        self.delete_collection_impl(collection_id).await
    }

    async fn list_collections_by_creator(&self, creator_id: i64) -> Result<Vec<Collection>> {
        self.list_collections_by_creator_impl(creator_id).await
    }

    // 收藏模块
    async fn add_favorite(&self, user_id: i64, collection_id: i64) -> Result<()> {
        self.add_favorite_impl(user_id, collection_id).await
    }

    async fn remove_favorite(&self, user_id: i64, collection_id: i64) -> Result<()> {
        self.remove_favorite_impl(user_id, collection_id).await
    }

    async fn is_favorited(&self, user_id: i64, collection_id: i64) -> Result<bool> {
        self.is_favorited_impl(user_id, collection_id).await
    }

    async fn list_favorite_collections(&self, user_id: i64) -> Result<Vec<Collection>> {
        self.list_favorite_collections_impl(user_id).await
    }

    // 分类模块
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category> {
        self.create_category_impl(category).await
    }

    async fn get_category_by_id(&self, category_id: i64) -> Result<Option<Category>> {
        self.get_category_by_id_impl(category_id).await
    }

    async fn list_categories(&self, collection_id: Option<i64>) -> Result<Vec<Category>> {
        self.list_categories_impl(collection_id).await
    }

    async fn update_category(
        &self,
        category_id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        self.update_category_impl(category_id, update).await
    }

    async fn delete_category(&self, category_id: i64) -> Result<Option<MediaPaths>> {
        self.delete_category_impl(category_id).await
    }

    async fn get_category_resources(&self, category_id: i64) -> Result<CategoryResourcesResponse> {
        self.get_category_resources_impl(category_id).await
    }

    // 视频模块
    async fn create_video(&self, video: CreateVideoRequest) -> Result<Video> {
        self.create_video_impl(video).await
    }

    async fn get_video_by_id(&self, video_id: i64) -> Result<Option<Video>> {
        self.get_video_by_id_impl(video_id).await
    }

    async fn list_videos(&self, category_id: Option<i64>) -> Result<Vec<Video>> {
        self.list_videos_impl(category_id).await
    }

    async fn update_video(
        &self,
        video_id: i64,
        update: UpdateVideoRequest,
    ) -> Result<Option<Video>> {
        self.update_video_impl(video_id, update).await
    }

    async fn delete_video(&self, video_id: i64) -> Result<Option<Video>> {
        self.delete_video_impl(video_id).await
    }

    async fn list_collection_videos(&self, collection_ids: &[i64]) -> Result<Vec<Video>> {
        self.list_collection_videos_impl(collection_ids).await
    }

    async fn count_collection_videos(&self, collection_id: i64) -> Result<i64> {
        self.count_collection_videos_impl(collection_id).await
    }

    // 学习资料模块
    async fn create_material(&self, material: CreateMaterialRequest) -> Result<Material> {
        self.create_material_impl(material).await
    }

    async fn get_material_by_id(&self, material_id: i64) -> Result<Option<Material>> {
        self.get_material_by_id_impl(material_id).await
    }

    async fn list_materials(&self, category_id: Option<i64>) -> Result<Vec<Material>> {
        self.list_materials_impl(category_id).await
    }

    async fn update_material(
        &self,
        material_id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>> {
        self.update_material_impl(material_id, update).await
    }

    async fn delete_material(&self, material_id: i64) -> Result<Option<Material>> {
        self.delete_material_impl(material_id).await
    }

    // 作业模块
    async fn create_homework(&self, homework: CreateHomeworkRequest) -> Result<Homework> {
        self.create_homework_impl(homework).await
    }

    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>> {
        self.get_homework_by_id_impl(homework_id).await
    }

    async fn list_homeworks(&self, category_id: Option<i64>) -> Result<Vec<Homework>> {
        self.list_homeworks_impl(category_id).await
    }

    async fn update_homework(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>> {
        self.update_homework_impl(homework_id, update).await
    }

    async fn delete_homework(&self, homework_id: i64) -> Result<bool> {
        self.delete_homework_impl(homework_id).await
    }

    // 题目模块
    async fn list_questions(&self, homework_id: i64) -> Result<Vec<Question>> {
        self.list_questions_impl(homework_id).await
    }

    async fn save_questions(
        &self,
        homework_id: i64,
        questions: Vec<QuestionInput>,
    ) -> Result<Vec<Question>> {
        self.save_questions_impl(homework_id, questions).await
    }

    // 成绩模块
    async fn create_score(&self, homework_id: i64, user_id: i64, score: i64) -> Result<Score> {
        self.create_score_impl(homework_id, user_id, score).await
    }

    async fn list_homework_scores(
        &self,
        homework_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<Score>> {
        self.list_homework_scores_impl(homework_id, user_id).await
    }

    async fn list_course_scores(&self, collection_id: i64, user_id: i64) -> Result<Vec<Score>> {
        self.list_course_scores_impl(collection_id, user_id).await
    }

    // 播放记录模块
    async fn upsert_playback_progress(
        &self,
        user_id: i64,
        video_id: i64,
        progress: i32,
        duration: i32,
    ) -> Result<PlaybackStat> {
        self.upsert_playback_progress_impl(user_id, video_id, progress, duration)
            .await
    }

    async fn ensure_playback_stat(&self, user_id: i64, video_id: i64) -> Result<PlaybackStat> {
        self.ensure_playback_stat_impl(user_id, video_id).await
    }

    async fn list_user_playback_stats(&self, user_id: i64) -> Result<Vec<PlaybackStat>> {
        self.list_user_playback_stats_impl(user_id).await
    }

    async fn list_user_collection_playback(
        &self,
        user_id: i64,
        collection_ids: &[i64],
    ) -> Result<Vec<PlaybackStat>> {
        self.list_user_collection_playback_impl(user_id, collection_ids)
            .await
    }

    async fn list_course_progress_records(
        &self,
        collection_id: i64,
    ) -> Result<Vec<CourseProgressRecord>> {
        self.list_course_progress_records_impl(collection_id).await
    }

    // 搜索模块
    async fn search(&self, keyword: &str) -> Result<SearchResponse> {
        self.search_impl(keyword).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("videoone.db").unwrap(),
            "sqlite://videoone.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").unwrap(),
            "postgres://u:p@localhost/db"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }

    #[test]
    fn test_is_sqlite_memory() {
        assert!(SeaOrmStorage::is_sqlite_memory("sqlite::memory:"));
        assert!(SeaOrmStorage::is_sqlite_memory("sqlite://file?mode=memory"));
        assert!(!SeaOrmStorage::is_sqlite_memory("sqlite://videoone.db"));
    }
}
