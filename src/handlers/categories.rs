// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::{AppError, ensure_found},
    models::category::category_map,
    state::SharedStore,
};

/// Lists every category as an `{id: name}` object.
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let categories = ensure_found(store.categories().await?, "categories")?;

    Ok(Json(json!({
        "success": true,
        "categories": category_map(categories),
    })))
}

/// Lists all questions of one category.
pub async fn list_category_questions(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|e| AppError::NotFound(e.to_string()))?;

    let questions = ensure_found(store.questions_in_category(id).await?, "questions")?;
    let current_category = store.category(id).await?.map(|c| c.kind);

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": questions.len(),
        "current_category": current_category,
    })))
}
