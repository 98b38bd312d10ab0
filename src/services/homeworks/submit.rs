use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{HomeworkService, grading::grade};
use crate::errors::VideoOneError;
use crate::models::{
    ApiResponse, ErrorCode,
    homeworks::{requests::SubmitAnswersRequest, responses::SubmitAnswersResponse},
};
use crate::services::require_user;

/// 判分成功后追加一条成绩；任何题目缺失时不写入
pub async fn submit_answers(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    req: SubmitAnswersRequest,
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

    let questions = match storage.list_questions(homework_id).await {
        Ok(questions) => questions,
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    let total = match grade(&questions, &req.answers) {
        Ok(total) => total,
        Err(VideoOneError::NotFound(msg)) => {
            warn!(
                "User {} submitted unknown question to homework {}: {}",
                user.id, homework_id, msg
            );
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::QuestionNotFound, msg)));
        }
        Err(e) => return Ok(ApiResponse::from_error(&e)),
    };

    match storage.create_score(homework_id, user.id, total).await {
        Ok(score) => {
            info!(
                "User {} scored {} on homework {}",
                user.id, score.score, homework_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmitAnswersResponse { score: score.score },
                "Answers submitted successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::from_error(&e)),
    }
}
