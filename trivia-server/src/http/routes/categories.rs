//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::{ApiError, ResultExt};
use crate::http::extractors::{id_method_not_allowed, IdPath, Page};
use crate::http::server::AppState;
use crate::models::{Category, CategoryMap, Question};

/// Category listing response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Questions of one category
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - all categories as `{id: type}`
///
/// Any storage failure is reported as 422.
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .store
        .list_categories()
        .await
        .or_api(ApiError::Unprocessable)?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: Category::into_map(categories),
    }))
}

/// GET /categories/{id}/questions - paginated questions of one category
///
/// A missing category and an empty page are the same 404.
async fn category_questions(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    Page(page): Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .store
        .get_category(id)
        .await
        .or_api(ApiError::Internal)?;
    let selection = state
        .store
        .questions_by_category(id)
        .await
        .or_api(ApiError::Internal)?;

    let window = page.window(&selection);
    let Some(category) = category.filter(|_| !window.is_empty()) else {
        tracing::debug!(category = id, page = page.page, "no questions for category page");
        return Err(ApiError::NotFound);
    };

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: window.to_vec(),
        total_questions: selection.len(),
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{id}/questions",
            get(category_questions).fallback(id_method_not_allowed),
        )
}
