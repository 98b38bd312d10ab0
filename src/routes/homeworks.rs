use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::homeworks::requests::{
    CreateHomeworkRequest, HomeworkListParams, SaveQuestionsRequest, SubmitAnswersRequest,
    UpdateHomeworkRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::HomeworkService;
use crate::utils::SafeIDI64;

// 懒加载的全局 HomeworkService 实例
static HOMEWORK_SERVICE: Lazy<HomeworkService> = Lazy::new(HomeworkService::new_lazy);

// 列出作业
pub async fn list_homeworks(
    req: HttpRequest,
    query: web::Query<HomeworkListParams>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .list_homeworks(&req, query.into_inner())
        .await
}

// 创建作业
pub async fn create_homework(
    req: HttpRequest,
    body: web::Json<CreateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .create_homework(&req, body.into_inner())
        .await
}

// 获取作业详情
pub async fn get_homework(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.get_homework(&req, path.0).await
}

// 更新作业
pub async fn update_homework(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .update_homework(&req, path.0, body.into_inner())
        .await
}

// 删除作业
pub async fn delete_homework(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.delete_homework(&req, path.0).await
}

// 题目列表
pub async fn list_questions(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.list_questions(&req, path.0).await
}

// 批量保存题目
pub async fn save_questions(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<SaveQuestionsRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .save_questions(&req, path.0, body.into_inner())
        .await
}

// 提交答案
pub async fn submit_answers(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<SubmitAnswersRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .submit_answers(&req, path.0, body.into_inner())
        .await
}

// 作业全部成绩
pub async fn list_scores(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.list_scores(&req, path.0).await
}

// 我的成绩
pub async fn list_my_scores(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.list_my_scores(&req, path.0).await
}

// 配置路由
pub fn configure_homeworks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/homeworks")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出作业 - 所有登录用户可访问
                    .route(web::get().to(list_homeworks))
                    // 创建作业 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_homework)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_homework))
                    // 更新作业 - 仅教师和管理员
                    .route(
                        web::put()
                            .to(update_homework)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    // 删除作业 - 仅教师和管理员
                    .route(
                        web::delete()
                            .to(delete_homework)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/questions")
                    // 普通用户看不到正确答案，业务层处理
                    .route(web::get().to(list_questions))
                    .route(
                        web::post()
                            .to(save_questions)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(web::resource("/{id}/submit").route(web::post().to(submit_answers)))
            .service(
                web::resource("/{id}/scores")
                    .route(web::get().to(list_scores))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            .service(web::resource("/{id}/scores/me").route(web::get().to(list_my_scores))),
    );
}
