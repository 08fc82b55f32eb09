//! Repository layer for database operations.

use crate::domain::{Category, NewQuestion, Page, Question};
use sqlx::sqlite::SqlitePool;

/// Repository for category and question storage.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // =========================================================================
    // Category operations
    // =========================================================================

    /// All categories ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories ORDER BY id ASC"#)
            .fetch_all(&self.pool)
            .await
    }

    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    // =========================================================================
    // Question operations
    // =========================================================================

    /// Count questions, optionally restricted to one category.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count_questions(&self, category: Option<i64>) -> Result<i64, sqlx::Error> {
        let count: (i64,) = match category {
            Some(category) => {
                sqlx::query_as("SELECT COUNT(*) FROM questions WHERE category = ?")
                    .bind(category)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM questions")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count.0)
    }

    /// One page of questions ordered by id, optionally restricted to a category.
    ///
    /// Pages that can never hold rows yield an empty list.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_questions(
        &self,
        category: Option<i64>,
        page: Page,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let Some(offset) = page.offset() else {
            return Ok(Vec::new());
        };

        match category {
            Some(category) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, difficulty, category
                    FROM questions
                    WHERE category = ?
                    ORDER BY id ASC
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(category)
                .bind(page.size())
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, difficulty, category
                    FROM questions
                    ORDER BY id ASC
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(page.size())
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// Every question of a category, or of all categories when `None`.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn questions_in_category(
        &self,
        category: Option<i64>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        match category {
            Some(category) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, difficulty, category
                    FROM questions
                    WHERE category = ?
                    ORDER BY id ASC
                    "#,
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, difficulty, category
                    FROM questions
                    ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// Case-insensitive substring search over question text, ordered by id.
    ///
    /// SQLite's `LIKE` and `LOWER` only fold ASCII, so the match runs here
    /// with Unicode lowercasing on both sides. The term is matched
    /// literally.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let questions = self.questions_in_category(None).await?;
        Ok(questions
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    /// Insert a question, returning its new id.
    ///
    /// Returns `Ok(None)` without writing when the referenced category does
    /// not exist. The check and the insert share one transaction.
    ///
    /// # Errors
    /// Returns an error if the transaction fails.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<Option<i64>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let matching: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = ?")
            .bind(new.category())
            .fetch_one(&mut *tx)
            .await?;
        if matching == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(new.question())
        .bind(new.answer())
        .bind(new.difficulty())
        .bind(new.category())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(result.last_insert_rowid()))
    }

    /// Delete a question by id. Returns whether a row was removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
