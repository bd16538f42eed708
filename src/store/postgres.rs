// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{QuestionStore, StoreResult};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// `QuestionStore` backed by the PostgreSQL tables created in `migrations/`.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .inspect_err(|e| tracing::error!("Failed to list categories: {:?}", e))
    }

    async fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch category {}: {:?}", id, e))
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| tracing::error!("Failed to list questions: {:?}", e))
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| {
            tracing::error!("Failed to list questions in category {}: {:?}", category, e)
        })
    }

    async fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| tracing::error!("Failed to fetch question {}: {:?}", id, e))
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .inspect_err(|e| tracing::error!("Failed to create question: {:?}", e))
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .inspect_err(|e| tracing::error!("Failed to delete question {}: {:?}", id, e))?;

        Ok(result.rows_affected() > 0)
    }
}
