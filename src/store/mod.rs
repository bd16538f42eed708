// src/store/mod.rs

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Read/write access to categories and questions.
///
/// All listings are ordered by ascending id.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    async fn category(&self, id: i64) -> StoreResult<Option<Category>>;

    async fn questions(&self) -> StoreResult<Vec<Question>>;

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>>;

    async fn question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Inserts the question and returns its new id.
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i64>;

    /// Returns `false` when no question had that id.
    async fn delete_question(&self, id: i64) -> StoreResult<bool>;
}
