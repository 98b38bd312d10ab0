use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 删除记录后需要清理的媒体文件（相对路径）
pub type MediaPaths = Vec<String>;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 按令牌中的身份信息创建或更新用户
    async fn sync_user(&self, id: i64, username: &str, role: UserRole) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// 合辑管理方法
    async fn create_collection(
        &self,
        creator_id: i64,
        collection: CreateCollectionRequest,
    ) -> Result<Collection>;
    async fn get_collection_by_id(&self, collection_id: i64) -> Result<Option<Collection>>;
    async fn list_collections_with_pagination(
        &self,
        query: CollectionListQuery,
    ) -> Result<CollectionListResponse>;
    async fn update_collection(
        &self,
        collection_id: i64,
        update: UpdateCollectionRequest,
    ) -> Result<Option<Collection>>;
    // 删除合辑，返回合辑及其下视频、资料引用的媒体文件；不存在时返回 None
    async fn delete_collection(&self, collection_id: i64) -> Result<Option<MediaPaths>>;
    // 用户创建的合辑
    async fn list_collections_by_creator(&self, creator_id: i64) -> Result<Vec<Collection>>;

    /// 收藏方法
    // 收藏与取消收藏均幂等
    async fn add_favorite(&self, user_id: i64, collection_id: i64) -> Result<()>;
    async fn remove_favorite(&self, user_id: i64, collection_id: i64) -> Result<()>;
    async fn is_favorited(&self, user_id: i64, collection_id: i64) -> Result<bool>;
    async fn list_favorite_collections(&self, user_id: i64) -> Result<Vec<Collection>>;

    /// 分类管理方法
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category>;
    async fn get_category_by_id(&self, category_id: i64) -> Result<Option<Category>>;
    async fn list_categories(&self, collection_id: Option<i64>) -> Result<Vec<Category>>;
    async fn update_category(
        &self,
        category_id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>>;
    async fn delete_category(&self, category_id: i64) -> Result<Option<MediaPaths>>;
    // 分类下的视频、作业与资料
    async fn get_category_resources(&self, category_id: i64) -> Result<CategoryResourcesResponse>;

    /// 视频管理方法
    async fn create_video(&self, video: CreateVideoRequest) -> Result<Video>;
    async fn get_video_by_id(&self, video_id: i64) -> Result<Option<Video>>;
    async fn list_videos(&self, category_id: Option<i64>) -> Result<Vec<Video>>;
    async fn update_video(&self, video_id: i64, update: UpdateVideoRequest)
    -> Result<Option<Video>>;
    async fn delete_video(&self, video_id: i64) -> Result<Option<Video>>;
    // 课程下的全部视频
    async fn list_collection_videos(&self, collection_ids: &[i64]) -> Result<Vec<Video>>;
    async fn count_collection_videos(&self, collection_id: i64) -> Result<i64>;

    /// 学习资料管理方法
    async fn create_material(&self, material: CreateMaterialRequest) -> Result<Material>;
    async fn get_material_by_id(&self, material_id: i64) -> Result<Option<Material>>;
    async fn list_materials(&self, category_id: Option<i64>) -> Result<Vec<Material>>;
    async fn update_material(
        &self,
        material_id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>>;
    async fn delete_material(&self, material_id: i64) -> Result<Option<Material>>;

    /// 作业管理方法
    async fn create_homework(&self, homework: CreateHomeworkRequest) -> Result<Homework>;
    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>>;
    async fn list_homeworks(&self, category_id: Option<i64>) -> Result<Vec<Homework>>;
    async fn update_homework(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>>;
    async fn delete_homework(&self, homework_id: i64) -> Result<bool>;

    /// 题目管理方法
    async fn list_questions(&self, homework_id: i64) -> Result<Vec<Question>>;
    // 在一个事务中新建或更新题目
    async fn save_questions(
        &self,
        homework_id: i64,
        questions: Vec<QuestionInput>,
    ) -> Result<Vec<Question>>;

    /// 成绩方法
    // 追加一条成绩记录
    async fn create_score(&self, homework_id: i64, user_id: i64, score: i64) -> Result<Score>;
    async fn list_homework_scores(
        &self,
        homework_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<Score>>;
    async fn list_course_scores(&self, collection_id: i64, user_id: i64) -> Result<Vec<Score>>;

    /// 播放记录方法
    // 原子 upsert：进度只增不减，时长与最后播放时间总是刷新
    async fn upsert_playback_progress(
        &self,
        user_id: i64,
        video_id: i64,
        progress: i32,
        duration: i32,
    ) -> Result<PlaybackStat>;
    // 不存在时创建进度为 0 的记录
    async fn ensure_playback_stat(&self, user_id: i64, video_id: i64) -> Result<PlaybackStat>;
    async fn list_user_playback_stats(&self, user_id: i64) -> Result<Vec<PlaybackStat>>;
    async fn list_user_collection_playback(
        &self,
        user_id: i64,
        collection_ids: &[i64],
    ) -> Result<Vec<PlaybackStat>>;
    // 课程下全部播放记录及对应用户名
    async fn list_course_progress_records(
        &self,
        collection_id: i64,
    ) -> Result<Vec<CourseProgressRecord>>;

    /// 搜索方法
    async fn search(&self, keyword: &str) -> Result<SearchResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
