use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::extract::{LenientI64, ValidJson, ValidPath, ValidQuery};
use super::AppState;
use crate::domain::{category_map, CategoryMap, NewQuestion, Page, Question};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

#[derive(Debug, Deserialize)]
pub struct NewQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LenientI64>,
    pub category: Option<LenientI64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

pub async fn list_questions(
    ValidQuery(params): ValidQuery<PageQuery>,
    State(state): State<AppState>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let page = Page::from_query(params.page.as_deref(), state.config.questions_per_page);

    let questions = state.repo.list_questions(None, page).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "no questions on page {}",
            page.number()
        )));
    }

    let total_questions = state.repo.count_questions(None).await?;
    let categories = category_map(state.repo.list_categories().await?);

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        categories,
    }))
}

pub async fn delete_question(
    ValidPath(id): ValidPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !state.repo.delete_question(id).await? {
        return Err(AppError::NotFound(format!("question {}", id)));
    }
    tracing::info!(question_id = id, "question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

pub async fn create_question(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<NewQuestionRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let new = NewQuestion::new(
        body.question,
        body.answer,
        body.difficulty.map(|d| d.0),
        body.category.map(|c| c.0),
    )
    .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let created = state.repo.insert_question(&new).await?.ok_or_else(|| {
        AppError::Unprocessable(format!("category {} does not exist", new.category()))
    })?;
    tracing::info!(question_id = created, category = new.category(), "question created");

    Ok(Json(CreatedResponse {
        success: true,
        created,
    }))
}

pub async fn search_questions(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let term = body
        .search_term
        .ok_or_else(|| AppError::Unprocessable("searchTerm is required".into()))?;

    let questions = state.repo.search_questions(&term).await?;
    let total_questions = questions.len() as i64;

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions,
    }))
}
