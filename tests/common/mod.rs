#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use trivia::api::{self, AppState};
use trivia::config::Config;
use trivia::{init_db, seed_demo_data, Question, QuestionPicker, Repository};

/// Seeded fixture ids: categories are inserted Science=1 through Sports=6,
/// questions 1 through 19 in seed order.
pub const SCIENCE: i64 = 1;
pub const ART: i64 = 2;
pub const HISTORY: i64 = 4;
pub const SEEDED_QUESTIONS: i64 = 19;
pub const SCIENCE_QUESTION_IDS: [i64; 3] = [16, 17, 18];

pub struct TestApp {
    pub app: axum::Router,
    pub repo: Arc<Repository>,
    _temp: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    build(true, None).await
}

pub async fn setup_empty_app() -> TestApp {
    build(false, None).await
}

pub async fn setup_app_with_picker(picker: Arc<dyn QuestionPicker>) -> TestApp {
    build(true, Some(picker)).await
}

async fn build(seed: bool, picker: Option<Arc<dyn QuestionPicker>>) -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    if seed {
        seed_demo_data(&pool).await.expect("seed failed");
    }
    let repo = Arc::new(Repository::new(pool));

    let config = Config {
        port: 0,
        database_path: db_path,
        questions_per_page: 10,
        seed_demo_data: seed,
    };

    let mut state = AppState::new(repo.clone(), config);
    if let Some(picker) = picker {
        state = state.with_picker(picker);
    }

    TestApp {
        app: api::create_router(state),
        repo,
        _temp: temp_dir,
    }
}

pub async fn insert_category(repo: &Repository, kind: &str) -> i64 {
    sqlx::query(r#"INSERT INTO categories ("type") VALUES (?)"#)
        .bind(kind)
        .execute(repo.pool())
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn fetch_question(repo: &Repository, id: i64) -> Option<Question> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, difficulty, category FROM questions WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(repo.pool())
    .await
    .unwrap()
}

pub async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn delete(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "unexpected status, body: {}", body);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}
