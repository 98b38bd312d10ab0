use super::SeaOrmStorage;
use crate::entity::collections::{Column as CollectionColumn, Entity as Collections};
use crate::entity::homeworks::{Column as HomeworkColumn, Entity as Homeworks};
use crate::entity::videos::{Column as VideoColumn, Entity as Videos};
use crate::errors::{Result, VideoOneError};
use crate::models::search::responses::SearchResponse;
use crate::utils::icontains;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 按名称/标题模糊搜索合辑、视频与作业
    pub async fn search_impl(&self, keyword: &str) -> Result<SearchResponse> {
        let collections = Collections::find()
            .filter(icontains(CollectionColumn::Name, keyword))
            .order_by_desc(CollectionColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("搜索合辑失败: {e}")))?;

        let videos = Videos::find()
            .filter(icontains(VideoColumn::Title, keyword))
            .order_by_desc(VideoColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("搜索视频失败: {e}")))?;

        let homeworks = Homeworks::find()
            .filter(icontains(HomeworkColumn::Title, keyword))
            .order_by_asc(HomeworkColumn::Deadline)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("搜索作业失败: {e}")))?;

        Ok(SearchResponse {
            collections: collections
                .into_iter()
                .map(|m| m.into_collection())
                .collect(),
            videos: videos.into_iter().map(|m| m.into_video()).collect(),
            homeworks: homeworks.into_iter().map(|m| m.into_homework()).collect(),
        })
    }
}
