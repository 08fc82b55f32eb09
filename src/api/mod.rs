pub mod categories;
pub mod extract;
pub mod health;
pub mod questions;
pub mod quizzes;

use crate::config::Config;
use crate::db::Repository;
use crate::error::AppError;
use crate::quiz::{QuestionPicker, RandomPicker};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
    pub picker: Arc<dyn QuestionPicker>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self {
            repo,
            config,
            picker: Arc::new(RandomPicker),
        }
    }

    /// Replace the quiz random source, e.g. with a seeded picker.
    pub fn with_picker(mut self, picker: Arc<dyn QuestionPicker>) -> Self {
        self.picker = picker;
        self
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/categories", get(categories::get_categories))
        .route(
            "/categories/:id/questions",
            get(categories::get_category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/:id", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(not_found)
        .layer(middleware::map_response(method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Give the router's bare 405 responses the JSON error envelope.
async fn method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}
