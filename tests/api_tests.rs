//! HTTP 层集成测试
//!
//! 使用内存 SQLite 与 Moka 缓存，令牌由测试直接签发。

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use rust_videoone::cache::{MokaCacheWrapper, ObjectCache};
use rust_videoone::config::DatabaseConfig;
use rust_videoone::routes;
use rust_videoone::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use rust_videoone::utils::jwt::JwtUtils;
use rust_videoone::utils::{json_error_handler, query_error_handler};

const TEACHER: (i64, &str, &str) = (1, "teacher", "teacher");
const ALICE: (i64, &str, &str) = (2, "alice", "user");
const BOB: (i64, &str, &str) = (3, "bob", "user");

async fn setup() -> (Arc<dyn Storage>, Arc<dyn ObjectCache>) {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 30,
    };
    let storage = SeaOrmStorage::connect(&config.url, &config)
        .await
        .expect("in-memory database");
    let cache = MokaCacheWrapper::with_settings(1_000, 300);
    (Arc::new(storage), Arc::new(cache))
}

fn bearer(user: (i64, &str, &str)) -> (&'static str, String) {
    let token = JwtUtils::generate_access_token(user.0, user.1, user.2).expect("token");
    ("Authorization", format!("Bearer {token}"))
}

macro_rules! init_app {
    ($storage:expr, $cache:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::Data::new($cache.clone()))
                .configure(routes::configure_api_routes),
        )
        .await
    };
}

macro_rules! call {
    ($app:expr, $method:ident, $uri:expr, $user:expr) => {{
        let req = test::TestRequest::$method()
            .uri($uri)
            .insert_header(bearer($user))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
    ($app:expr, $method:ident, $uri:expr, $user:expr, $payload:expr) => {{
        let req = test::TestRequest::$method()
            .uri($uri)
            .insert_header(bearer($user))
            .set_json($payload)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

/// 合辑 -> 分类，返回 (collection_id, category_id)
macro_rules! create_course {
    ($app:expr, $name:expr) => {{
        let (status, body) = call!(
            $app,
            post,
            "/api/v1/collections",
            TEACHER,
            json!({ "name": $name, "description": "intro" })
        );
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let collection_id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = call!(
            $app,
            post,
            "/api/v1/categories",
            TEACHER,
            json!({ "collection_id": collection_id, "name": "Week 1" })
        );
        assert_eq!(status, StatusCode::CREATED, "{body}");
        (collection_id, body["data"]["id"].as_i64().unwrap())
    }};
}

macro_rules! create_video {
    ($app:expr, $category_id:expr, $title:expr) => {{
        let (status, body) = call!(
            $app,
            post,
            "/api/v1/videos",
            TEACHER,
            json!({
                "category_id": $category_id,
                "title": $title,
                "url": "videos/2026/10/abc_lesson.mp4",
                "duration": "10:00"
            })
        );
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_i64().unwrap()
    }};
}

#[actix_web::test]
async fn test_health_without_token() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::get()
        .uri("/api/v1/system/health")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "ok");
}

#[actix_web::test]
async fn test_requests_without_token_are_rejected() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::get()
        .uri("/api/v1/collections")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_plain_user_cannot_create_collection() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let (status, _) = call!(
        app,
        post,
        "/api/v1/collections",
        ALICE,
        json!({ "name": "Not allowed" })
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_user_row_synced_from_token() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let (status, _) = call!(app, get, "/api/v1/collections", ALICE);
    assert_eq!(status, StatusCode::OK);

    let user = storage.get_user_by_id(ALICE.0).await.unwrap().unwrap();
    assert_eq!(user.username, "alice");
}

#[actix_web::test]
async fn test_username_taken_by_another_id_is_rejected() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let (status, _) = call!(app, get, "/api/v1/collections", ALICE);
    assert_eq!(status, StatusCode::OK);

    let impostor = (4, "alice", "user");
    let (status, body) = call!(app, get, "/api/v1/collections", impostor);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["message"].as_str().unwrap().contains("already bound"));

    assert!(storage.get_user_by_id(4).await.unwrap().is_none());
    let user = storage.get_user_by_id(ALICE.0).await.unwrap().unwrap();
    assert_eq!(user.username, "alice");
}

#[actix_web::test]
async fn test_grading_flow() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (_, category_id) = create_course!(app, "Rust Basics");

    let (status, body) = call!(
        app,
        post,
        "/api/v1/homeworks",
        TEACHER,
        json!({
            "category_id": category_id,
            "title": "Quiz 1",
            "deadline": "2030-01-01T00:00:00Z"
        })
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let homework_id = body["data"]["id"].as_i64().unwrap();

    let questions_uri = format!("/api/v1/homeworks/{homework_id}/questions");
    let (status, body) = call!(
        app,
        post,
        &questions_uri,
        TEACHER,
        json!({ "questions": [
            {
                "type": "single",
                "content": "Which keyword moves ownership?",
                "options": [
                    { "text": "A", "isCorrect": false },
                    { "text": "B", "isCorrect": true },
                    { "text": "C", "isCorrect": false }
                ],
                "score": 10
            },
            {
                "type": "multi",
                "content": "Pick the smart pointers",
                "options": [
                    { "text": "A", "isCorrect": true },
                    { "text": "B", "isCorrect": false },
                    { "text": "C", "isCorrect": true }
                ],
                "score": 5
            }
        ]})
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    let single_id = body["data"]["items"][0]["id"].as_i64().unwrap();
    let multi_id = body["data"]["items"][1]["id"].as_i64().unwrap();

    // 普通用户看不到正确答案
    let (status, body) = call!(app, get, &questions_uri, ALICE);
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["items"][0]["options"][1].get("isCorrect").is_none());

    let (status, _) = call!(
        app,
        post,
        &questions_uri,
        ALICE,
        json!({ "questions": [] })
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let submit_uri = format!("/api/v1/homeworks/{homework_id}/submit");
    let (status, body) = call!(
        app,
        post,
        &submit_uri,
        ALICE,
        json!({ "answers": [
            { "questionId": multi_id, "answer": ["C", "A"] },
            { "questionId": single_id, "answer": "B" }
        ]})
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["score"], 15);

    let (status, body) = call!(
        app,
        post,
        &submit_uri,
        ALICE,
        json!({ "answers": [
            { "questionId": single_id, "answer": "A" },
            { "questionId": multi_id, "answer": ["A"] }
        ]})
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["score"], 0);

    // 未知题目整次提交失败，不写成绩
    let (status, body) = call!(
        app,
        post,
        &submit_uri,
        ALICE,
        json!({ "answers": [
            { "questionId": single_id, "answer": "B" },
            { "questionId": 9999, "answer": "B" }
        ]})
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("9999"));

    let (status, body) = call!(
        app,
        get,
        &format!("/api/v1/homeworks/{homework_id}/scores/me"),
        ALICE
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);

    let (status, _) = call!(
        app,
        get,
        &format!("/api/v1/homeworks/{homework_id}/scores"),
        ALICE
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call!(
        app,
        get,
        &format!("/api/v1/homeworks/{homework_id}/scores"),
        TEACHER
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_malformed_submission_writes_no_score() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (_, category_id) = create_course!(app, "Submissions");

    let (_, body) = call!(
        app,
        post,
        "/api/v1/homeworks",
        TEACHER,
        json!({
            "category_id": category_id,
            "title": "Quiz",
            "deadline": "2030-01-01T00:00:00Z"
        })
    );
    let homework_id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = call!(
        app,
        post,
        &format!("/api/v1/homeworks/{homework_id}/questions"),
        TEACHER,
        json!({ "questions": [
            { "type": "single", "content": "Q", "options": [{ "text": "B", "isCorrect": true }], "score": 10 }
        ]})
    );
    let question_id = body["data"]["items"][0]["id"].as_i64().unwrap();
    let submit_uri = format!("/api/v1/homeworks/{homework_id}/submit");

    // 缺少题目 ID
    let (status, body) = call!(
        app,
        post,
        &submit_uri,
        ALICE,
        json!({ "answers": [{ "answer": "B" }] })
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("questionId"));

    // 同一题重复作答
    let (status, _) = call!(
        app,
        post,
        &submit_uri,
        ALICE,
        json!({ "answers": [
            { "questionId": question_id, "answer": "B" },
            { "questionId": question_id, "answer": "B" },
            { "questionId": question_id, "answer": "B" }
        ]})
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        app,
        get,
        &format!("/api/v1/homeworks/{homework_id}/scores/me"),
        ALICE
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_question_save_validation() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (_, category_id) = create_course!(app, "Validation");

    let (_, body) = call!(
        app,
        post,
        "/api/v1/homeworks",
        TEACHER,
        json!({
            "category_id": category_id,
            "title": "Quiz",
            "deadline": "2030-01-01T00:00:00Z"
        })
    );
    let homework_id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/homeworks/{homework_id}/questions");

    let (status, _) = call!(
        app,
        post,
        &uri,
        TEACHER,
        json!({ "questions": [
            { "type": "single", "content": "Q", "options": [], "score": 1 }
        ]})
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(
        app,
        post,
        &uri,
        TEACHER,
        json!({ "questions": [
            { "type": "single", "content": "Q", "options": [{ "text": "A", "isCorrect": true }], "score": -1 }
        ]})
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = call!(app, get, &uri, TEACHER);
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_playback_progress_never_decreases() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (_, category_id) = create_course!(app, "Playback");
    let video_id = create_video!(app, category_id, "Lesson 1");

    let (status, body) = call!(
        app,
        post,
        "/api/v1/playback-stats/progress",
        ALICE,
        json!({ "videoId": video_id, "progress": 60, "duration": 90 })
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["progress"], 60);

    let (_, body) = call!(
        app,
        post,
        "/api/v1/playback-stats/progress",
        ALICE,
        json!({ "videoId": video_id, "progress": 30, "duration": 120 })
    );
    assert_eq!(body["data"]["progress"], 60);
    assert_eq!(body["data"]["duration"], 120);

    let (status, _) = call!(
        app,
        post,
        "/api/v1/playback-stats/progress",
        ALICE,
        json!({ "videoId": 9999, "progress": 10, "duration": 1 })
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call!(
        app,
        post,
        "/api/v1/playback-stats/progress",
        ALICE,
        json!({ "videoId": video_id, "progress": -5, "duration": 1 })
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = call!(app, get, "/api/v1/playback-stats", ALICE);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["progress"], 60);
}

#[actix_web::test]
async fn test_video_detail_creates_playback_once() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (_, category_id) = create_course!(app, "Detail");
    let video_id = create_video!(app, category_id, "Lesson 1");
    let uri = format!("/api/v1/videos/{video_id}");

    let (status, first) = call!(app, get, &uri, BOB);
    assert_eq!(status, StatusCode::OK, "{first}");
    assert_eq!(first["data"]["playback"]["progress"], 0);

    let (_, second) = call!(app, get, &uri, BOB);
    assert_eq!(
        first["data"]["playback"]["id"],
        second["data"]["playback"]["id"]
    );

    let rows = storage.list_user_playback_stats(BOB.0).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[actix_web::test]
async fn test_progress_stats_aggregation() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (collection_id, category_id) = create_course!(app, "Stats");
    let first = create_video!(app, category_id, "Lesson 1");
    let second = create_video!(app, category_id, "Lesson 2");

    for (video_id, progress) in [(first, 100), (second, 50)] {
        let (status, _) = call!(
            app,
            post,
            "/api/v1/playback-stats/progress",
            ALICE,
            json!({ "videoId": video_id, "progress": progress, "duration": 10 })
        );
        assert_eq!(status, StatusCode::OK);
    }
    // bob 打开过两个视频但没有进度
    for video_id in [first, second] {
        let (status, _) = call!(app, get, &format!("/api/v1/videos/{video_id}"), BOB);
        assert_eq!(status, StatusCode::OK);
    }

    let uri = format!("/api/v1/collections/{collection_id}/progress-stats");
    let (status, _) = call!(app, get, &uri, ALICE);
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call!(app, get, &uri, TEACHER);
    assert_eq!(status, StatusCode::OK, "{body}");
    let top = body["data"]["top_10"].as_array().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["username"], "alice");
    assert_eq!(top[0]["progress"].as_f64().unwrap(), 75.0);
    assert_eq!(top[1]["username"], "bob");
    assert_eq!(top[1]["progress"].as_f64().unwrap(), 0.0);

    let bottom = body["data"]["bottom_10"].as_array().unwrap();
    assert_eq!(bottom[0]["username"], "bob");

    let pie = body["data"]["pie_data"].as_array().unwrap();
    assert_eq!(pie[0]["value"], 0);
    assert_eq!(pie[1]["value"], 2);

    let (status, _) = call!(app, get, "/api/v1/collections/9999/progress-stats", TEACHER);
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call!(
        app,
        get,
        &format!("/api/v1/collections/{collection_id}/video-stats"),
        ALICE
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "total": 2, "completed": 1, "in_progress": 1, "not_started": 0 })
    );
}

#[actix_web::test]
async fn test_progress_stats_empty_course() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (collection_id, _) = create_course!(app, "Empty");

    let (status, body) = call!(
        app,
        get,
        &format!("/api/v1/collections/{collection_id}/progress-stats"),
        TEACHER
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["top_10"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["pie_data"][0]["value"], 0);
    assert_eq!(body["data"]["pie_data"][1]["value"], 0);
}

#[actix_web::test]
async fn test_favorites_and_resource_access() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (collection_id, category_id) = create_course!(app, "Favorites");
    let video_id = create_video!(app, category_id, "Lesson 1");

    let resources_uri =
        format!("/api/v1/collections/{collection_id}/categories/{category_id}/resources");
    let (status, _) = call!(app, get, &resources_uri, ALICE);
    assert_eq!(status, StatusCode::FORBIDDEN);

    let favorite_uri = format!("/api/v1/collections/{collection_id}/favorite");
    for _ in 0..2 {
        let (status, body) = call!(app, post, &favorite_uri, ALICE);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["is_favorited"], true);
    }

    let (_, body) = call!(app, get, "/api/v1/collections/favorites", ALICE);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = call!(
        app,
        get,
        &format!("/api/v1/collections/{collection_id}"),
        ALICE
    );
    assert_eq!(body["data"]["is_favorited"], true);
    assert_eq!(body["data"]["categories"].as_array().unwrap().len(), 1);

    let (status, body) = call!(app, get, &resources_uri, ALICE);
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["videos"][0]["id"], video_id);

    call!(
        app,
        post,
        "/api/v1/playback-stats/progress",
        ALICE,
        json!({ "videoId": video_id, "progress": 20, "duration": 5 })
    );
    let (status, body) = call!(app, get, "/api/v1/collections/favorites/stats", ALICE);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["videos"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["playback_stats"][0]["progress"], 20);

    let unfavorite_uri = format!("/api/v1/collections/{collection_id}/unfavorite");
    for _ in 0..2 {
        let (status, body) = call!(app, post, &unfavorite_uri, ALICE);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["is_favorited"], false);
    }
    let (_, body) = call!(app, get, "/api/v1/collections/favorites", ALICE);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_only_creator_or_admin_manages_collection() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (collection_id, _) = create_course!(app, "Owned");
    let uri = format!("/api/v1/collections/{collection_id}");

    let other_teacher = (4, "carol", "teacher");
    let (status, _) = call!(app, put, &uri, other_teacher, json!({ "name": "Renamed" }));
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call!(app, put, &uri, TEACHER, json!({ "name": "Renamed" }));
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["name"], "Renamed");

    let admin = (5, "root", "admin");
    let (status, _) = call!(app, delete, &uri, admin);
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call!(app, get, &uri, ALICE);
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_search_and_duplicate_names() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);
    let (_, category_id) = create_course!(app, "Async Rust");
    create_video!(app, category_id, "Futures in depth");

    let (status, _) = call!(
        app,
        post,
        "/api/v1/collections",
        TEACHER,
        json!({ "name": "Async Rust" })
    );
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = call!(app, get, "/api/v1/search?q=async", ALICE);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["collections"].as_array().unwrap().len(), 1);
    assert!(body["data"]["videos"].as_array().unwrap().is_empty());

    let (_, body) = call!(app, get, "/api/v1/search?q=FUTURES", ALICE);
    assert_eq!(body["data"]["videos"].as_array().unwrap().len(), 1);

    let (_, body) = call!(app, get, "/api/v1/search?q=%20", ALICE);
    assert!(body["data"]["collections"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/api/v1/playback-stats/progress")
        .insert_header(bearer(ALICE))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
