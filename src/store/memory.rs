// src/store/memory.rs

use std::sync::RwLock;

use async_trait::async_trait;

use super::{QuestionStore, StoreResult};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// In-process `QuestionStore`. Ids are handed out in increasing order and
/// never reused, matching a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut categories = categories;
        categories.sort_by_key(|c| c.id);
        Self {
            inner: RwLock::new(Tables {
                categories,
                questions: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// The six categories seeded by the SQL migrations.
    pub fn with_default_categories() -> Self {
        let names = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];
        Self::new(
            names
                .iter()
                .zip(1..)
                .map(|(name, id)| Category { id, kind: name.to_string() })
                .collect(),
        )
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.inner
            .read()
            .map_err(|_| sqlx::Error::Protocol("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.inner
            .write()
            .map_err(|_| sqlx::Error::Protocol("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }

    async fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions.clone())
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i64> {
        let mut tables = self.write()?;
        let id = tables.next_id;
        tables.next_id += 1;
        // Ids only grow, so pushing keeps the vector ordered.
        tables.questions.push(Question {
            id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        });
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let mut tables = self.write()?;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() != before)
    }
}
