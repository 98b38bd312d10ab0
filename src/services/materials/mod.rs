pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::materials::requests::{
    CreateMaterialRequest, MaterialListParams, UpdateMaterialRequest,
};
use crate::storage::Storage;

pub const MATERIAL_TITLE_MAX_CHARS: usize = 100;
pub const MATERIAL_URL_MAX_CHARS: usize = 200;

pub struct MaterialService {
    storage: Option<Arc<dyn Storage>>,
}

impl MaterialService {
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

    pub async fn list_materials(
        &self,
        request: &HttpRequest,
        query: MaterialListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_materials(self, request, query).await
    }

    pub async fn create_material(
        &self,
        request: &HttpRequest,
        req: CreateMaterialRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_material(self, request, req).await
    }

    pub async fn get_material(
        &self,
        request: &HttpRequest,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_material(self, request, material_id).await
    }

    pub async fn update_material(
        &self,
        request: &HttpRequest,
        material_id: i64,
        req: UpdateMaterialRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_material(self, request, material_id, req).await
    }

    pub async fn delete_material(
        &self,
        request: &HttpRequest,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_material(self, request, material_id).await
    }
}

fn validate_url(url: &str) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err("Material url must not be empty".to_string());
    }
    if url.chars().count() > MATERIAL_URL_MAX_CHARS {
        return Err(format!(
            "Material url must be at most {MATERIAL_URL_MAX_CHARS} characters"
        ));
    }
    Ok(())
}
