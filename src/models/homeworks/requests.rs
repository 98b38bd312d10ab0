use crate::models::homeworks::entities::{QuestionOption, QuestionType};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct CreateHomeworkRequest {
    pub category_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub deadline: DateTime<Utc>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
}

/// 更新作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct UpdateHomeworkRequest {
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
}

/// 作业列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct HomeworkListParams {
    pub category_id: Option<i64>,
}

/// 保存题目时的单个题目，id 为空表示新建
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct QuestionInput {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    #[ts(type = "string")]
    pub question_type: QuestionType,
    pub content: String,
    pub options: Vec<QuestionOption>,
    pub score: i32,
}

/// 批量保存题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct SaveQuestionsRequest {
    pub questions: Vec<QuestionInput>,
}

/// 提交的答案：单选为文本，多选为文本列表
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct SubmittedAnswer {
    #[serde(rename = "questionId")]
    pub question_id: i64,
    // 缺省视为未作答
    #[serde(default)]
    pub answer: Option<AnswerValue>,
}

/// 提交作业答案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_uses_camel_case_ids() {
        let req: SubmitAnswersRequest = serde_json::from_str(
            r#"{"answers":[{"questionId":1,"answer":"B"},{"questionId":2,"answer":["A","C"]}]}"#,
        )
        .unwrap();
        assert_eq!(req.answers.len(), 2);
        assert_eq!(
            req.answers[0].answer,
            Some(AnswerValue::Single("B".to_string()))
        );
        assert_eq!(
            req.answers[1].answer,
            Some(AnswerValue::Multi(vec!["A".to_string(), "C".to_string()]))
        );
    }

    #[test]
    fn test_missing_answer_is_none() {
        let req: SubmitAnswersRequest =
            serde_json::from_str(r#"{"answers":[{"questionId":3}]}"#).unwrap();
        assert!(req.answers[0].answer.is_none());
    }

    #[test]
    fn test_missing_question_id_names_wire_field() {
        let err = serde_json::from_str::<SubmitAnswersRequest>(r#"{"answers":[{"answer":"B"}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("questionId"));
    }
}
