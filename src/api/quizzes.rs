use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::extract::{LenientI64, ValidJson};
use super::AppState;
use crate::domain::Question;
use crate::error::AppError;
use crate::quiz::select_next;

/// Category filter for a quiz. An id of 0, or none, means every category.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<LenientI64>,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

pub async fn play_quiz(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let (category, kind) = match body.quiz_category {
        Some(QuizCategory { kind, id }) => match id {
            None | Some(LenientI64(0)) => (None, kind),
            Some(LenientI64(id)) => (Some(id), kind),
        },
        None => (None, None),
    };

    if let Some(id) = category {
        if state.repo.get_category(id).await?.is_none() {
            return Err(AppError::NotFound(format!("category {}", id)));
        }
    }

    let previous: HashSet<i64> = body
        .previous_questions
        .unwrap_or_default()
        .into_iter()
        .collect();

    let candidates = state.repo.questions_in_category(category).await?;
    let question = select_next(candidates, &previous, state.picker.as_ref());
    tracing::debug!(
        category = ?category,
        category_type = kind.as_deref().unwrap_or("all"),
        asked = previous.len(),
        picked = ?question.as_ref().map(|q| q.id),
        "quiz question selected"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
