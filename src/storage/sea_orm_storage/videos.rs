use super::SeaOrmStorage;
use crate::entity::categories::{Column as CategoryColumn, Entity as Categories};
use crate::entity::videos::{ActiveModel, Column, Entity as Videos};
use crate::errors::{Result, VideoOneError};
use crate::models::videos::{
    entities::Video,
    requests::{CreateVideoRequest, UpdateVideoRequest},
};
use crate::utils::validate::DEFAULT_DURATION;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建视频
    pub async fn create_video_impl(&self, req: CreateVideoRequest) -> Result<Video> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            category_id: Set(req.category_id),
            title: Set(req.title),
            description: Set(req.description),
            url: Set(req.url),
            duration: Set(req.duration.unwrap_or_else(|| DEFAULT_DURATION.to_string())),
            thumbnail: Set(req.thumbnail),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("创建视频失败: {e}")))?;

        Ok(result.into_video())
    }

    /// 通过 ID 获取视频
    pub async fn get_video_by_id_impl(&self, video_id: i64) -> Result<Option<Video>> {
        let result = Videos::find_by_id(video_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询视频失败: {e}")))?;

        Ok(result.map(|m| m.into_video()))
    }

    /// 列出视频，可按分类筛选
    pub async fn list_videos_impl(&self, category_id: Option<i64>) -> Result<Vec<Video>> {
        let mut select = Videos::find();
        if let Some(category_id) = category_id {
            select = select.filter(Column::CategoryId.eq(category_id));
        }

        let result = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询视频列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_video()).collect())
    }

    /// 更新视频
    pub async fn update_video_impl(
        &self,
        video_id: i64,
        update: UpdateVideoRequest,
    ) -> Result<Option<Video>> {
        let existing = Videos::find_by_id(video_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询视频失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(category_id) = update.category_id {
            model.category_id = Set(category_id);
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(url) = update.url {
            model.url = Set(url);
        }
        if let Some(duration) = update.duration {
            model.duration = Set(duration);
        }
        if let Some(thumbnail) = update.thumbnail {
            model.thumbnail = Set(Some(thumbnail));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("更新视频失败: {e}")))?;

        Ok(Some(result.into_video()))
    }

    /// 删除视频，返回被删除的记录以便清理媒体文件
    pub async fn delete_video_impl(&self, video_id: i64) -> Result<Option<Video>> {
        let Some(existing) = Videos::find_by_id(video_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询视频失败: {e}")))?
        else {
            return Ok(None);
        };

        Videos::delete_by_id(video_id)
            .exec(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("删除视频失败: {e}")))?;

        Ok(Some(existing.into_video()))
    }

    /// 一组课程下的全部视频
    pub async fn list_collection_videos_impl(&self, collection_ids: &[i64]) -> Result<Vec<Video>> {
        let category_ids = category_ids_of(&self.db, collection_ids).await?;
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Videos::find()
            .filter(Column::CategoryId.is_in(category_ids))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询课程视频失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_video()).collect())
    }

    /// 课程视频总数
    pub async fn count_collection_videos_impl(&self, collection_id: i64) -> Result<i64> {
        let category_ids = category_ids_of(&self.db, &[collection_id]).await?;
        if category_ids.is_empty() {
            return Ok(0);
        }

        let count = Videos::find()
            .filter(Column::CategoryId.is_in(category_ids))
            .count(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("统计课程视频失败: {e}")))?;

        Ok(count as i64)
    }
}

/// 一组课程下的分类 ID
pub(super) async fn category_ids_of<C>(db: &C, collection_ids: &[i64]) -> Result<Vec<i64>>
where
    C: ConnectionTrait,
{
    if collection_ids.is_empty() {
        return Ok(Vec::new());
    }

    Categories::find()
        .select_only()
        .column(CategoryColumn::Id)
        .filter(CategoryColumn::CollectionId.is_in(collection_ids.to_vec()))
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| VideoOneError::database_operation(format!("查询分类失败: {e}")))
}
