use super::SeaOrmStorage;
use super::collections::collect_category_media;
use crate::entity::categories::{ActiveModel, Column, Entity as Categories};
use crate::entity::homeworks::{Column as HomeworkColumn, Entity as Homeworks};
use crate::entity::materials::{Column as MaterialColumn, Entity as Materials};
use crate::entity::videos::{Column as VideoColumn, Entity as Videos};
use crate::errors::{Result, VideoOneError};
use crate::models::categories::{
    entities::Category,
    requests::{CreateCategoryRequest, UpdateCategoryRequest},
    responses::CategoryResourcesResponse,
};
use crate::storage::MediaPaths;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建分类
    pub async fn create_category_impl(&self, req: CreateCategoryRequest) -> Result<Category> {
        let model = ActiveModel {
            collection_id: Set(req.collection_id),
            name: Set(req.name),
            progress: Set(req.progress.unwrap_or(0)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("创建分类失败: {e}")))?;

        Ok(result.into_category())
    }

    /// 通过 ID 获取分类
    pub async fn get_category_by_id_impl(&self, category_id: i64) -> Result<Option<Category>> {
        let result = Categories::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询分类失败: {e}")))?;

        Ok(result.map(|m| m.into_category()))
    }

    /// 列出分类，可按合辑筛选
    pub async fn list_categories_impl(&self, collection_id: Option<i64>) -> Result<Vec<Category>> {
        let mut select = Categories::find();
        if let Some(collection_id) = collection_id {
            select = select.filter(Column::CollectionId.eq(collection_id));
        }

        let result = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询分类列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_category()).collect())
    }

    /// 更新分类
    pub async fn update_category_impl(
        &self,
        category_id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        let existing = Categories::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询分类失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(progress) = update.progress {
            model.progress = Set(progress);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("更新分类失败: {e}")))?;

        Ok(Some(result.into_category()))
    }

    /// 删除分类，返回其视频与资料引用的媒体文件
    pub async fn delete_category_impl(&self, category_id: i64) -> Result<Option<MediaPaths>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| VideoOneError::database_operation(format!("开启事务失败: {e}")))?;

        let exists = Categories::find_by_id(category_id)
            .one(&txn)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询分类失败: {e}")))?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let media = collect_category_media(&txn, &[category_id]).await?;

        Categories::delete_by_id(category_id)
            .exec(&txn)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("删除分类失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| VideoOneError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(media))
    }

    /// 分类下的视频、作业与资料
    pub async fn get_category_resources_impl(
        &self,
        category_id: i64,
    ) -> Result<CategoryResourcesResponse> {
        let videos = Videos::find()
            .filter(VideoColumn::CategoryId.eq(category_id))
            .order_by_asc(VideoColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询视频失败: {e}")))?;

        let homeworks = Homeworks::find()
            .filter(HomeworkColumn::CategoryId.eq(category_id))
            .order_by_asc(HomeworkColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询作业失败: {e}")))?;

        let materials = Materials::find()
            .filter(MaterialColumn::CategoryId.eq(category_id))
            .order_by_asc(MaterialColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询学习资料失败: {e}")))?;

        Ok(CategoryResourcesResponse {
            videos: videos.into_iter().map(|m| m.into_video()).collect(),
            homeworks: homeworks.into_iter().map(|m| m.into_homework()).collect(),
            materials: materials.into_iter().map(|m| m.into_material()).collect(),
        })
    }
}
