use super::SeaOrmStorage;
use crate::entity::homeworks::{ActiveModel, Column, Entity as Homeworks};
use crate::errors::{Result, VideoOneError};
use crate::models::homeworks::{
    entities::Homework,
    requests::{CreateHomeworkRequest, UpdateHomeworkRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_homework_impl(&self, req: CreateHomeworkRequest) -> Result<Homework> {
        let model = ActiveModel {
            category_id: Set(req.category_id),
            title: Set(req.title),
            description: Set(req.description),
            deadline: Set(req.deadline.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_homework())
    }

    /// 通过 ID 获取作业
    pub async fn get_homework_by_id_impl(&self, homework_id: i64) -> Result<Option<Homework>> {
        let result = Homeworks::find_by_id(homework_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_homework()))
    }

    /// 列出作业，按截止时间排序
    pub async fn list_homeworks_impl(&self, category_id: Option<i64>) -> Result<Vec<Homework>> {
        let mut select = Homeworks::find();
        if let Some(category_id) = category_id {
            select = select.filter(Column::CategoryId.eq(category_id));
        }

        let result = select
            .order_by_asc(Column::Deadline)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_homework()).collect())
    }

    /// 更新作业
    pub async fn update_homework_impl(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>> {
        let existing = Homeworks::find_by_id(homework_id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询作业失败: {e}")))?;

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
        if let Some(deadline) = update.deadline {
            model.deadline = Set(deadline.timestamp());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(Some(result.into_homework()))
    }

    /// 删除作业（题目与成绩级联删除）
    pub async fn delete_homework_impl(&self, homework_id: i64) -> Result<bool> {
        let result = Homeworks::delete_by_id(homework_id)
            .exec(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

}
