pub mod create;
pub mod delete;
pub mod get;
pub mod grading;
pub mod list;
pub mod questions;
pub mod scores;
pub mod submit;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::homeworks::requests::{
    CreateHomeworkRequest, HomeworkListParams, SaveQuestionsRequest, SubmitAnswersRequest,
    UpdateHomeworkRequest,
};
use crate::storage::Storage;

pub const HOMEWORK_TITLE_MAX_CHARS: usize = 100;

pub struct HomeworkService {
    storage: Option<Arc<dyn Storage>>,
}

impl HomeworkService {
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

    pub async fn list_homeworks(
        &self,
        request: &HttpRequest,
        query: HomeworkListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_homeworks(self, request, query).await
    }

    pub async fn create_homework(
        &self,
        request: &HttpRequest,
        req: CreateHomeworkRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_homework(self, request, req).await
    }

    pub async fn get_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_homework(self, request, homework_id).await
    }

    pub async fn update_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        req: UpdateHomeworkRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_homework(self, request, homework_id, req).await
    }

    pub async fn delete_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_homework(self, request, homework_id).await
    }

    // 题目列表，普通用户看不到正确答案
    pub async fn list_questions(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        questions::list_questions(self, request, homework_id).await
    }

    pub async fn save_questions(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        req: SaveQuestionsRequest,
    ) -> ActixResult<HttpResponse> {
        questions::save_questions(self, request, homework_id, req).await
    }

    // 提交答案并判分
    pub async fn submit_answers(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        req: SubmitAnswersRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_answers(self, request, homework_id, req).await
    }

    pub async fn list_scores(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        scores::list_scores(self, request, homework_id, false).await
    }

    pub async fn list_my_scores(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        scores::list_scores(self, request, homework_id, true).await
    }
}
