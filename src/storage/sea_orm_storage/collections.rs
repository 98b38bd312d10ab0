use super::SeaOrmStorage;
use crate::entity::categories::{Column as CategoryColumn, Entity as Categories};
use crate::entity::collections::{ActiveModel, Column, Entity as Collections};
use crate::entity::favorite_collections::{
    ActiveModel as FavoriteActiveModel, Column as FavoriteColumn, Entity as FavoriteCollections,
};
use crate::entity::materials::{Column as MaterialColumn, Entity as Materials};
use crate::entity::videos::{Column as VideoColumn, Entity as Videos};
use crate::errors::{Result, VideoOneError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    collections::{
        entities::Collection,
        requests::{CollectionListQuery, CreateCollectionRequest, UpdateCollectionRequest},
        responses::CollectionListResponse,
    },
};
use crate::storage::MediaPaths;
use crate::utils::icontains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait, sea_query::OnConflict,
};

impl SeaOrmStorage {
    /// 创建合辑
    pub async fn create_collection_impl(
        &self,
        creator_id: i64,
        req: CreateCollectionRequest,
    ) -> Result<Collection> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            creator_id: Set(creator_id),
            thumbnail: Set(req.thumbnail),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("创建合辑失败: {e}")))?;

        Ok(result.into_collection())
    }

    /// 通过 ID 获取合辑
    pub async fn get_collection_by_id_impl(&self, collection_id: i64) -> Result<Option<Collection>> {
        let result = Collections::find_by_id(collection_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询合辑失败: {e}")))?;

        Ok(result.map(|m| m.into_collection()))
    }

    /// 分页列出合辑
    pub async fn list_collections_with_pagination_impl(
        &self,
        query: CollectionListQuery,
    ) -> Result<CollectionListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Collections::find();

        // 创建者筛选
        if let Some(creator_id) = query.creator_id {
            select = select.filter(Column::CreatorId.eq(creator_id));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(icontains(Column::Name, search.trim()));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt).order_by_desc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询合辑总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询合辑页数失败: {e}")))?;

        let collections = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询合辑列表失败: {e}")))?;

        Ok(CollectionListResponse {
            items: collections
                .into_iter()
                .map(|m| m.into_collection())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新合辑
    pub async fn update_collection_impl(
        &self,
        collection_id: i64,
        update: UpdateCollectionRequest,
    ) -> Result<Option<Collection>> {
        let existing = Collections::find_by_id(collection_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询合辑失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(thumbnail) = update.thumbnail {
            model.thumbnail = Set(Some(thumbnail));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("更新合辑失败: {e}")))?;

        Ok(Some(result.into_collection()))
    }

    /// 删除合辑，级联删除分类及其资源，返回需要清理的媒体文件
    pub async fn delete_collection_impl(&self, collection_id: i64) -> Result<Option<MediaPaths>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| VideoOneError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(collection) = Collections::find_by_id(collection_id)
            .one(&txn)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询合辑失败: {e}")))?
        else {
            return Ok(None);
        };

        let category_ids: Vec<i64> = Categories::find()
            .select_only()
            .column(CategoryColumn::Id)
            .filter(CategoryColumn::CollectionId.eq(collection_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询分类失败: {e}")))?;

        let mut media: MediaPaths = collection.thumbnail.clone().into_iter().collect();
        media.extend(collect_category_media(&txn, &category_ids).await?);

        Collections::delete_by_id(collection_id)
            .exec(&txn)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("删除合辑失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| VideoOneError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(media))
    }

    /// 用户创建的合辑
    pub async fn list_collections_by_creator_impl(&self, creator_id: i64) -> Result<Vec<Collection>> {
        let result = Collections::find()
            .filter(Column::CreatorId.eq(creator_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询合辑列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_collection()).collect())
    }

    /// 收藏合辑，重复收藏不报错
    pub async fn add_favorite_impl(&self, user_id: i64, collection_id: i64) -> Result<()> {
        let model = FavoriteActiveModel {
            user_id: Set(user_id),
            collection_id: Set(collection_id),
        };

        FavoriteCollections::insert(model)
            .on_conflict(
                OnConflict::columns([FavoriteColumn::UserId, FavoriteColumn::CollectionId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("收藏合辑失败: {e}")))?;

        Ok(())
    }

    /// 取消收藏
    pub async fn remove_favorite_impl(&self, user_id: i64, collection_id: i64) -> Result<()> {
        FavoriteCollections::delete_many()
            .filter(FavoriteColumn::UserId.eq(user_id))
            .filter(FavoriteColumn::CollectionId.eq(collection_id))
            .exec(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("取消收藏失败: {e}")))?;

        Ok(())
    }

    pub async fn is_favorited_impl(&self, user_id: i64, collection_id: i64) -> Result<bool> {
        let count = FavoriteCollections::find()
            .filter(FavoriteColumn::UserId.eq(user_id))
            .filter(FavoriteColumn::CollectionId.eq(collection_id))
            .count(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询收藏状态失败: {e}")))?;

        Ok(count > 0)
    }

    /// 用户收藏的合辑
    pub async fn list_favorite_collections_impl(&self, user_id: i64) -> Result<Vec<Collection>> {
        let favorite_ids: Vec<i64> = FavoriteCollections::find()
            .select_only()
            .column(FavoriteColumn::CollectionId)
            .filter(FavoriteColumn::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询收藏失败: {e}")))?;

        if favorite_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Collections::find()
            .filter(Column::Id.is_in(favorite_ids))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询收藏合辑失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_collection()).collect())
    }
}

/// 收集分类下视频与资料引用的媒体文件
pub(super) async fn collect_category_media<C>(db: &C, category_ids: &[i64]) -> Result<MediaPaths>
where
    C: ConnectionTrait,
{
    if category_ids.is_empty() {
        return Ok(Vec::new());
    }

    let videos: Vec<(String, Option<String>)> = Videos::find()
        .select_only()
        .column(VideoColumn::Url)
        .column(VideoColumn::Thumbnail)
        .filter(VideoColumn::CategoryId.is_in(category_ids.to_vec()))
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| VideoOneError::database_operation(format!("查询视频失败: {e}")))?;

    let materials: Vec<String> = Materials::find()
        .select_only()
        .column(MaterialColumn::Url)
        .filter(MaterialColumn::CategoryId.is_in(category_ids.to_vec()))
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| VideoOneError::database_operation(format!("查询学习资料失败: {e}")))?;

    let mut media = Vec::with_capacity(videos.len() * 2 + materials.len());
    for (url, thumbnail) in videos {
        media.push(url);
        media.extend(thumbnail);
    }
    media.extend(materials);
    Ok(media)
}
