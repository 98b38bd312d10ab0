use crate::models::homeworks::entities::{Homework, Question, Score};
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct HomeworkListResponse {
    pub items: Vec<Homework>,
}

/// 题目选项视图，学员看不到正确标记
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct QuestionOptionView {
    pub text: String,
    #[serde(rename = "isCorrect", skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct QuestionView {
    pub id: i64,
    pub homework_id: i64,
    #[serde(rename = "type")]
    pub question_type: String,
    pub content: String,
    pub options: Vec<QuestionOptionView>,
    pub score: i32,
}

impl QuestionView {
    pub fn from_question(question: Question, reveal_answers: bool) -> Self {
        Self {
            id: question.id,
            homework_id: question.homework_id,
            question_type: question.question_type.to_string(),
            content: question.content,
            options: question
                .options
                .into_iter()
                .map(|o| QuestionOptionView {
                    text: o.text,
                    is_correct: reveal_answers.then_some(o.is_correct),
                })
                .collect(),
            score: question.score,
        }
    }
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct QuestionListResponse {
    pub items: Vec<QuestionView>,
}

/// 判分结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct SubmitAnswersResponse {
    pub score: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct ScoreListResponse {
    pub items: Vec<Score>,
}
