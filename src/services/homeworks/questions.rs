use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::HomeworkService;
use crate::errors::{Result, VideoOneError};
use crate::models::{
    ApiResponse, ErrorCode,
    homeworks::{
        requests::{QuestionInput, SaveQuestionsRequest},
        responses::{QuestionListResponse, QuestionView},
    },
};
use crate::services::require_user;

pub async fn list_questions(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match require_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.get_homework_by_id(homework_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::HomeworkNotFound,
                "Homework not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    }

    let reveal_answers = user.role.is_staff();
    match storage.list_questions(homework_id).await {
        Ok(questions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuestionListResponse {
                items: questions
                    .into_iter()
                    .map(|q| QuestionView::from_question(q, reveal_answers))
                    .collect(),
            },
            "Questions retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}

pub async fn save_questions(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    req: SaveQuestionsRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = req.questions.iter().try_for_each(validate_question) {
        return Ok(ApiResponse::from_error(&e));
    }

    let storage = service.get_storage(request);

    match storage.get_homework_by_id(homework_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::HomeworkNotFound,
                "Homework not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    }

    match storage.save_questions(homework_id, req.questions).await {
        Ok(saved) => {
            info!("Saved {} questions for homework {}", saved.len(), homework_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                QuestionListResponse {
                    items: saved
                        .into_iter()
                        .map(|q| QuestionView::from_question(q, true))
                        .collect(),
                },
                "Questions saved successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}

/// 题目内容非空、至少一个选项、分值不为负
fn validate_question(question: &QuestionInput) -> Result<()> {
    if question.content.trim().is_empty() {
        return Err(VideoOneError::validation("Question content must not be empty"));
    }
    if question.options.is_empty() {
        return Err(VideoOneError::validation("Question options must not be empty"));
    }
    if question.score < 0 {
        return Err(VideoOneError::validation(format!(
            "Question score must not be negative, got {}",
            question.score
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::homeworks::entities::{QuestionOption, QuestionType};

    fn input(options: Vec<QuestionOption>, score: i32) -> QuestionInput {
        QuestionInput {
            id: None,
            question_type: QuestionType::Single,
            content: "2 + 2 = ?".to_string(),
            options,
            score,
        }
    }

    fn option(text: &str) -> QuestionOption {
        QuestionOption {
            text: text.to_string(),
            is_correct: text == "4",
        }
    }

    #[test]
    fn test_validate_question() {
        assert!(validate_question(&input(vec![option("4"), option("5")], 10)).is_ok());
        assert!(validate_question(&input(vec![option("4")], 0)).is_ok());

        let empty = validate_question(&input(vec![], 10)).unwrap_err();
        assert_eq!(empty.code(), "E007");

        let negative = validate_question(&input(vec![option("4")], -1)).unwrap_err();
        assert!(negative.message().contains("-1"));
    }
}
