use super::SeaOrmStorage;
use super::videos::category_ids_of;
use crate::entity::homeworks::{Column as HomeworkColumn, Entity as Homeworks};
use crate::entity::scores::{ActiveModel, Column, Entity as Scores};
use crate::errors::{Result, VideoOneError};
use crate::models::homeworks::entities::Score;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 追加一条成绩记录，同一用户可多次提交
    pub async fn create_score_impl(
        &self,
        homework_id: i64,
        user_id: i64,
        score: i64,
    ) -> Result<Score> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            homework_id: Set(homework_id),
            user_id: Set(user_id),
            score: Set(score),
            submitted_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("保存成绩失败: {e}")))?;

        Ok(result.into_score())
    }

    /// 作业成绩，可限定某个用户，最新的在前
    pub async fn list_homework_scores_impl(
        &self,
        homework_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<Score>> {
        let mut select = Scores::find().filter(Column::HomeworkId.eq(homework_id));
        if let Some(user_id) = user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        let result = select
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_score()).collect())
    }

    /// 用户在某课程全部作业上的成绩
    pub async fn list_course_scores_impl(
        &self,
        collection_id: i64,
        user_id: i64,
    ) -> Result<Vec<Score>> {
        let category_ids = category_ids_of(&self.db, &[collection_id]).await?;
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let homework_ids: Vec<i64> = Homeworks::find()
            .select_only()
            .column(HomeworkColumn::Id)
            .filter(HomeworkColumn::CategoryId.is_in(category_ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询作业失败: {e}")))?;

        if homework_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Scores::find()
            .filter(Column::HomeworkId.is_in(homework_ids))
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询课程成绩失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_score()).collect())
    }
}
