// src/handlers/quizzes.rs

use std::collections::HashSet;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    engine::next_question,
    error::AppError,
    models::question::QuizRequest,
    state::{SharedRng, SharedStore},
};

/// Serves one random question the player has not seen yet.
///
/// A malformed body is answered with 404. When every eligible question has
/// been played the response carries `"question": null`.
pub async fn play_quiz(
    State(store): State<SharedStore>,
    State(rng): State<SharedRng>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = body.map_err(|e| AppError::NotFound(e.body_text()))?;

    let category = req.category();
    let candidates = match category {
        Some(id) => store.questions_in_category(id).await?,
        None => store.questions().await?,
    };
    let excluded: HashSet<i64> = req.previous_questions.iter().copied().collect();

    let question = {
        let mut rng = rng
            .lock()
            .map_err(|_| AppError::InternalServerError("quiz rng lock poisoned".to_string()))?;
        next_question(&candidates, category, &excluded, &mut *rng).cloned()
    };

    match &question {
        Some(q) => tracing::debug!(?category, seen = excluded.len(), "Serving question {}", q.id),
        None => tracing::debug!(?category, seen = excluded.len(), "Quiz exhausted"),
    }

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
