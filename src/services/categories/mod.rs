pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::categories::requests::{
    CategoryListParams, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::storage::Storage;

pub const CATEGORY_NAME_MAX_CHARS: usize = 100;

pub struct CategoryService {
    storage: Option<Arc<dyn Storage>>,
}

impl CategoryService {
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

    pub async fn list_categories(
        &self,
        request: &HttpRequest,
        query: CategoryListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_categories(self, request, query).await
    }

    pub async fn create_category(
        &self,
        request: &HttpRequest,
        req: CreateCategoryRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_category(self, request, req).await
    }

    pub async fn get_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_category(self, request, category_id).await
    }

    pub async fn update_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
        req: UpdateCategoryRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_category(self, request, category_id, req).await
    }

    pub async fn delete_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_category(self, request, category_id).await
    }
}
