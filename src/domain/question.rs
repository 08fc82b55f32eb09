//! Questions and the validation applied before one is stored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

/// A stored quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

/// A question that passed boundary validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    difficulty: i64,
    category: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    Missing(&'static str),
    #[error("field {0} must not be blank")]
    Blank(&'static str),
    #[error("difficulty must be between 1 and 5, got {0}")]
    DifficultyOutOfRange(i64),
}

impl NewQuestion {
    /// Build a new question from optional fields, rejecting nulls and blanks.
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        difficulty: Option<i64>,
        category: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let question = required_text("question", question)?;
        let answer = required_text("answer", answer)?;
        let difficulty = difficulty.ok_or(ValidationError::Missing("difficulty"))?;
        let category = category.ok_or(ValidationError::Missing("category"))?;

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::DifficultyOutOfRange(difficulty));
        }

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }

    pub fn category(&self) -> i64 {
        self.category
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_valid_question() {
        let q = NewQuestion::new(text(" What is 2+2? "), text("4"), Some(1), Some(1)).unwrap();
        assert_eq!(q.question(), "What is 2+2?");
        assert_eq!(q.answer(), "4");
        assert_eq!(q.difficulty(), 1);
        assert_eq!(q.category(), 1);
    }

    #[test]
    fn test_null_category_rejected() {
        let err = NewQuestion::new(text("q"), text("a"), Some(1), None).unwrap_err();
        assert_eq!(err, ValidationError::Missing("category"));
    }

    #[test]
    fn test_null_question_rejected_first() {
        let err = NewQuestion::new(None, None, None, None).unwrap_err();
        assert_eq!(err, ValidationError::Missing("question"));
    }

    #[test]
    fn test_blank_answer_rejected() {
        let err = NewQuestion::new(text("q"), text("   "), Some(1), Some(1)).unwrap_err();
        assert_eq!(err, ValidationError::Blank("answer"));
    }

    #[test]
    fn test_difficulty_range() {
        assert!(NewQuestion::new(text("q"), text("a"), Some(5), Some(1)).is_ok());
        assert_eq!(
            NewQuestion::new(text("q"), text("a"), Some(0), Some(1)).unwrap_err(),
            ValidationError::DifficultyOutOfRange(0)
        );
        assert_eq!(
            NewQuestion::new(text("q"), text("a"), Some(6), Some(1)).unwrap_err(),
            ValidationError::DifficultyOutOfRange(6)
        );
    }
}
