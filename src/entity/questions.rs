//! 题目实体
//!
//! 选项以 JSON 文本保存：`[{"text": "...", "isCorrect": bool}]`。

use sea_orm::entity::prelude::*;

use crate::errors::VideoOneError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub homework_id: i64,
    pub question_type: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub options: String,
    pub score: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::homeworks::Entity",
        from = "Column::HomeworkId",
        to = "super::homeworks::Column::Id"
    )]
    Homework,
}

impl Related<super::homeworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homework.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 选项 JSON 损坏时返回序列化错误
    pub fn into_question(
        self,
    ) -> crate::errors::Result<crate::models::homeworks::entities::Question> {
        use crate::models::homeworks::entities::{Question, QuestionOption, QuestionType};

        let options: Vec<QuestionOption> = serde_json::from_str(&self.options).map_err(|e| {
            VideoOneError::serialization(format!(
                "Question {} has malformed options: {e}",
                self.id
            ))
        })?;

        Ok(Question {
            id: self.id,
            homework_id: self.homework_id,
            question_type: QuestionType::from(self.question_type.as_str()),
            content: self.content,
            options,
            score: self.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::homeworks::entities::QuestionType;

    fn row(options: &str) -> Model {
        Model {
            id: 9,
            homework_id: 1,
            question_type: "single".to_string(),
            content: "Q".to_string(),
            options: options.to_string(),
            score: 10,
        }
    }

    #[test]
    fn test_into_question_parses_options() {
        let question = row(r#"[{"text":"A","isCorrect":false},{"text":"B","isCorrect":true}]"#)
            .into_question()
            .unwrap();
        assert_eq!(question.question_type, QuestionType::Single);
        assert_eq!(question.correct_texts().collect::<Vec<_>>(), ["B"]);
    }

    #[test]
    fn test_into_question_rejects_malformed_options() {
        let err = row("not json").into_question().unwrap_err();
        assert!(matches!(err, VideoOneError::Serialization(_)));
        assert!(err.message().contains("Question 9"));
    }
}
