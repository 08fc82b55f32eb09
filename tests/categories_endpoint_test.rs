mod common;

use axum::http::StatusCode;
use common::*;

#[tokio::test]
async fn test_get_categories() {
    let test_app = setup_test_app().await;

    let (status, body) = get(test_app.app, "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let categories = body["categories"].as_object().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories["1"], "Science");
    assert_eq!(categories["6"], "Sports");
}

#[tokio::test]
async fn test_get_categories_empty_store() {
    let test_app = setup_empty_app().await;

    let (status, body) = get(test_app.app, "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["categories"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_category_sub_resource_not_found() {
    let test_app = setup_test_app().await;

    let (status, body) = get(test_app.app, "/categories/1000").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_get_questions_by_category() {
    let test_app = setup_test_app().await;

    let (status, body) = get(test_app.app, &format!("/categories/{}/questions", ART)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 4);
    assert_eq!(body["current_category"], "Art");

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 4);
    assert!(questions.iter().all(|q| q["category"] == ART));
}

#[tokio::test]
async fn test_get_questions_by_category_not_found() {
    let test_app = setup_test_app().await;

    let (status, body) = get(test_app.app, "/categories/1000/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_get_questions_by_category_non_numeric_id() {
    let test_app = setup_test_app().await;

    let (status, body) = get(test_app.app, "/categories/science/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_get_questions_by_category_page_beyond_data() {
    let test_app = setup_test_app().await;

    let (status, body) = get(
        test_app.app,
        &format!("/categories/{}/questions?page=2", SCIENCE),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_get_questions_by_category_without_questions() {
    let test_app = setup_empty_app().await;
    let id = insert_category(&test_app.repo, "Music").await;

    let (status, body) = get(test_app.app, &format!("/categories/{}/questions", id)).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_get_questions_by_category_undecodable_id() {
    let test_app = setup_test_app().await;

    let (status, body) = get(test_app.app, "/categories/%FF/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_get_questions_by_category_undecodable_query() {
    let test_app = setup_test_app().await;

    let (status, body) = get(
        test_app.app,
        &format!("/categories/{}/questions?page=1&page=2", SCIENCE),
    )
    .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "bad request");
}
