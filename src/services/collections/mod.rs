pub mod create;
pub mod delete;
pub mod detail;
pub mod favorites;
pub mod list;
pub mod resources;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::collections::requests::{
    CollectionListParams, CreateCollectionRequest, UpdateCollectionRequest,
};
use crate::storage::Storage;

/// 合辑名称最大长度
pub const COLLECTION_NAME_MAX_CHARS: usize = 100;

pub struct CollectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl CollectionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 分页获取合辑列表
    pub async fn list_collections(
        &self,
        request: &HttpRequest,
        query: CollectionListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_collections(self, request, query).await
    }

    // 当前用户创建的合辑
    pub async fn list_created_collections(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_created_collections(self, request).await
    }

    pub async fn create_collection(
        &self,
        request: &HttpRequest,
        req: CreateCollectionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_collection(self, request, req).await
    }

    // 合辑详情，附带分类与收藏状态
    pub async fn get_collection(
        &self,
        request: &HttpRequest,
        collection_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_collection(self, request, collection_id).await
    }

    pub async fn update_collection(
        &self,
        request: &HttpRequest,
        collection_id: i64,
        req: UpdateCollectionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_collection(self, request, collection_id, req).await
    }

    pub async fn delete_collection(
        &self,
        request: &HttpRequest,
        collection_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_collection(self, request, collection_id).await
    }

    // 收藏相关
    pub async fn list_favorites(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        favorites::list_favorites(self, request).await
    }

    pub async fn favorite(
        &self,
        request: &HttpRequest,
        collection_id: i64,
    ) -> ActixResult<HttpResponse> {
        favorites::set_favorite(self, request, collection_id, true).await
    }

    pub async fn unfavorite(
        &self,
        request: &HttpRequest,
        collection_id: i64,
    ) -> ActixResult<HttpResponse> {
        favorites::set_favorite(self, request, collection_id, false).await
    }

    // 分类下的学习资源
    pub async fn get_category_resources(
        &self,
        request: &HttpRequest,
        collection_id: i64,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        resources::get_category_resources(self, request, collection_id, category_id).await
    }
}
