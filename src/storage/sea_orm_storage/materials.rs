use super::SeaOrmStorage;
use crate::entity::materials::{ActiveModel, Column, Entity as Materials};
use crate::errors::{Result, VideoOneError};
use crate::models::materials::{
    entities::Material,
    requests::{CreateMaterialRequest, UpdateMaterialRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学习资料
    pub async fn create_material_impl(&self, req: CreateMaterialRequest) -> Result<Material> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            category_id: Set(req.category_id),
            title: Set(req.title),
            description: Set(req.description),
            url: Set(req.url),
            date: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("创建学习资料失败: {e}")))?;

        Ok(result.into_material())
    }

    pub async fn get_material_by_id_impl(&self, material_id: i64) -> Result<Option<Material>> {
        let result = Materials::find_by_id(material_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询学习资料失败: {e}")))?;

        Ok(result.map(|m| m.into_material()))
    }

    pub async fn list_materials_impl(&self, category_id: Option<i64>) -> Result<Vec<Material>> {
        let mut select = Materials::find();
        if let Some(category_id) = category_id {
            select = select.filter(Column::CategoryId.eq(category_id));
        }

        let result = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                VideoOneError::database_operation(format!("查询学习资料列表失败: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_material()).collect())
    }

    pub async fn update_material_impl(
        &self,
        material_id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>> {
        let existing = Materials::find_by_id(material_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询学习资料失败: {e}")))?;

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

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("更新学习资料失败: {e}")))?;

        Ok(Some(result.into_material()))
    }

    /// 删除学习资料，返回被删除的记录
    pub async fn delete_material_impl(&self, material_id: i64) -> Result<Option<Material>> {
        let Some(existing) = Materials::find_by_id(material_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询学习资料失败: {e}")))?
        else {
            return Ok(None);
        };

        Materials::delete_by_id(material_id)
            .exec(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("删除学习资料失败: {e}")))?;

        Ok(Some(existing.into_material()))
    }
}
