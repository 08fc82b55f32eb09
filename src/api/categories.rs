use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::extract::{ValidPath, ValidQuery};
use super::questions::PageQuery;
use super::AppState;
use crate::domain::{category_map, CategoryMap, Page, Question};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: String,
}

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = category_map(state.repo.list_categories().await?);
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

pub async fn get_category_questions(
    ValidPath(id): ValidPath<i64>,
    ValidQuery(params): ValidQuery<PageQuery>,
    State(state): State<AppState>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let category = state
        .repo
        .get_category(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {}", id)))?;

    let page = Page::from_query(params.page.as_deref(), state.config.questions_per_page);
    let questions = state.repo.list_questions(Some(category.id), page).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "no questions in category {} on page {}",
            category.id,
            page.number()
        )));
    }

    let total_questions = state.repo.count_questions(Some(category.id)).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category.kind,
    }))
}
