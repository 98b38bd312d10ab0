use super::SeaOrmStorage;
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::{Result, VideoOneError};
use crate::models::homeworks::{entities::Question, requests::QuestionInput};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 作业下的全部题目，按 ID 排序
    pub async fn list_questions_impl(&self, homework_id: i64) -> Result<Vec<Question>> {
        let result = Questions::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询题目失败: {e}")))?;

        result.into_iter().map(|m| m.into_question()).collect()
    }

    /// 批量保存题目：带 ID 的更新，不带 ID 的新建，全部成功或全部回滚
    pub async fn save_questions_impl(
        &self,
        homework_id: i64,
        questions: Vec<QuestionInput>,
    ) -> Result<Vec<Question>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| VideoOneError::database_operation(format!("开启事务失败: {e}")))?;

        let mut saved = Vec::with_capacity(questions.len());

        for input in questions {
            let options = serde_json::to_string(&input.options)?;

            let model = match input.id {
                Some(id) => {
                    let existing = Questions::find_by_id(id)
                        .filter(Column::HomeworkId.eq(homework_id))
                        .one(&txn)
                        .await
                        .map_err(|e| {
                            VideoOneError::database_operation(format!("查询题目失败: {e}"))
                        })?
                        .ok_or_else(|| {
                            VideoOneError::not_found(format!(
                                "Question {id} not found in homework {homework_id}"
                            ))
                        })?;

                    let mut model: ActiveModel = existing.into();
                    model.question_type = Set(input.question_type.to_string());
                    model.content = Set(input.content);
                    model.options = Set(options);
                    model.score = Set(input.score);
                    model.update(&txn).await.map_err(|e| {
                        VideoOneError::database_operation(format!("更新题目失败: {e}"))
                    })?
                }
                None => ActiveModel {
                    homework_id: Set(homework_id),
                    question_type: Set(input.question_type.to_string()),
                    content: Set(input.content),
                    options: Set(options),
                    score: Set(input.score),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| VideoOneError::database_operation(format!("创建题目失败: {e}")))?,
            };

            saved.push(model.into_question()?);
        }

        txn.commit()
            .await
            .map_err(|e| VideoOneError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(saved)
    }
}
