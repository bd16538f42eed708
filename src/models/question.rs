// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::error::AppError;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// References `categories.id`.
    pub category: i64,

    /// 1 (easy) to 5 (hard).
    pub difficulty: i32,
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
    #[validate(range(min = 1))]
    pub category: i64,
}

impl CreateQuestionRequest {
    /// Validates the payload. Text is stored exactly as submitted.
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        if let Err(validation_errors) = self.validate() {
            return Err(AppError::BadRequest(validation_errors.to_string()));
        }

        if self.question.trim().is_empty() || self.answer.trim().is_empty() {
            return Err(AppError::BadRequest(
                "question and answer must contain text".to_string(),
            ));
        }

        Ok(NewQuestion {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        })
    }
}

/// Raw body accepted by `POST /questions`.
///
/// The same endpoint searches or creates depending on which keys are present.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i64>,
}

/// What a `POST /questions` body asks for.
#[derive(Debug)]
pub enum QuestionsCommand {
    Search(String),
    Create(CreateQuestionRequest),
}

impl TryFrom<QuestionsBody> for QuestionsCommand {
    type Error = AppError;

    fn try_from(body: QuestionsBody) -> Result<Self, Self::Error> {
        if let Some(term) = body.search_term.filter(|t| !t.is_empty()) {
            return Ok(QuestionsCommand::Search(term));
        }

        match (body.question, body.answer, body.difficulty, body.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => {
                Ok(QuestionsCommand::Create(CreateQuestionRequest {
                    question,
                    answer,
                    difficulty,
                    category,
                }))
            }
            (None, ..) => Err(AppError::BadRequest(
                "body has neither searchTerm nor question".to_string(),
            )),
            _ => Err(AppError::BadRequest(
                "question, answer, difficulty and category are all required".to_string(),
            )),
        }
    }
}

/// Category selector sent by the quiz client. `id == 0` means any category.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

/// DTO for `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

impl QuizRequest {
    /// The category filter, with the "any category" sentinel folded into `None`.
    pub fn category(&self) -> Option<i64> {
        match self.quiz_category.id {
            0 => None,
            id => Some(id),
        }
    }
}
