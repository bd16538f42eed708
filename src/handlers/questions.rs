// src/handlers/questions.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    config::Config,
    engine::{paginate, search},
    error::{AppError, ensure_found},
    models::{
        category::category_map,
        question::{QuestionsBody, QuestionsCommand},
    },
    state::SharedStore,
};

/// Reads `page` from the query pairs.
///
/// The first `page` wins when it is repeated. Missing or non-numeric pages
/// fall back to the first page.
pub fn requested_page(pairs: &[(String, String)]) -> i64 {
    pairs
        .iter()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(1)
}

/// Lists one page of questions together with the category map.
pub async fn list_questions(
    State(store): State<SharedStore>,
    State(config): State<Config>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let page = match query {
        Ok(Query(pairs)) => requested_page(&pairs),
        Err(e) => {
            tracing::debug!("Unreadable query string, serving page 1: {}", e);
            1
        }
    };
    let all = store.questions().await?;
    let current = ensure_found(
        paginate(&all, page, config.questions_per_page).to_vec(),
        "questions",
    )?;
    let categories = category_map(store.categories().await?);

    tracing::debug!(page, returned = current.len(), total = all.len(), "Listed questions");

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": all.len(),
        "categories": categories,
        "current_category": null,
    })))
}

/// Deletes a question by ID.
///
/// An id with no row is reported as unprocessable, so deleting twice yields 422.
pub async fn delete_question(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|e| AppError::NotFound(e.to_string()))?;

    let deleted = store
        .delete_question(id)
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    if !deleted {
        return Err(AppError::Unprocessable(format!("question {} does not exist", id)));
    }

    tracing::info!("Deleted question {}", id);

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

/// Searches questions when the body carries a `searchTerm`, creates one otherwise.
pub async fn search_or_create_question(
    State(store): State<SharedStore>,
    body: Result<Json<QuestionsBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    match QuestionsCommand::try_from(body)? {
        QuestionsCommand::Search(term) => {
            let result = search(&store.questions().await?, &term);

            Ok(Json(json!({
                "success": true,
                "questions": result.questions,
                "total_questions": result.total,
                "current_category": null,
            })))
        }
        QuestionsCommand::Create(request) => {
            let new_question = request.into_new_question()?;
            let id = store.insert_question(new_question).await?;

            tracing::info!("Created question {}", id);

            Ok(Json(json!({
                "success": true,
                "created": id,
            })))
        }
    }
}
