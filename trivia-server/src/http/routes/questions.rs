//! Question endpoints
//!
//! Status choices per endpoint are part of the public contract:
//! - listing: empty page 404, storage failure 500
//! - create: any problem 422
//! - delete: any problem 404
//! - search: missing term 400, empty term or no match 404

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::{ApiError, ResultExt};
use crate::http::extractors::{id_method_not_allowed, IdPath, Page};
use crate::http::server::AppState;
use crate::models::{
    Category, CategoryMap, LooseInt, NewQuestion, Question, SearchTerm, ValidationError,
};

/// Create question request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<LooseInt>,
    pub difficulty: Option<LooseInt>,
}

impl CreateQuestionRequest {
    pub fn validate(self) -> Result<NewQuestion, ValidationError> {
        NewQuestion::new(self.question, self.answer, self.category, self.difficulty)
    }
}

/// Search request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Paginated question listing
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// Created question, echoed with `success`
#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    #[serde(flatten)]
    pub question: Question,
    pub success: bool,
}

/// Deletion result
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub message: &'static str,
    pub total_questions: i64,
}

/// Search result
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// GET /questions - paginated questions with the category map
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let selection = state
        .store
        .list_questions()
        .await
        .or_api(ApiError::Internal)?;
    let categories = state
        .store
        .list_categories()
        .await
        .or_api(ApiError::Internal)?;

    let window = page.window(&selection);
    if window.is_empty() {
        tracing::debug!(page = page.page, total = selection.len(), "page out of range");
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: window.to_vec(),
        total_questions: selection.len(),
        categories: Category::into_map(categories),
        current_category: None,
    }))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreatedQuestionResponse>, ApiError> {
    let Json(req) = body.or_api(ApiError::Unprocessable)?;
    let new = req.validate().or_api(ApiError::Unprocessable)?;

    let question = state
        .store
        .insert_question(new)
        .await
        .or_api(ApiError::Unprocessable)?;
    tracing::info!(id = question.id, category = question.category, "question created");

    Ok(Json(CreatedQuestionResponse {
        question,
        success: true,
    }))
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<DeletedResponse>, ApiError> {
    state
        .store
        .delete_question(id)
        .await
        .or_api(ApiError::NotFound)?;
    let total_questions = state
        .store
        .count_questions()
        .await
        .or_api(ApiError::NotFound)?;
    tracing::info!(id, total_questions, "question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        message: "Question deleted",
        total_questions,
    }))
}

/// POST /questions/search - case-insensitive substring search
///
/// `current_category` is the category of the first match, or null when that
/// category row does not exist.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(req) = body.or_api(ApiError::BadRequest)?;
    let term = match SearchTerm::new(req.search_term) {
        Ok(term) => term,
        Err(e @ ValidationError::Missing { .. }) => return Err(e).or_api(ApiError::BadRequest),
        Err(e) => return Err(e).or_api(ApiError::NotFound),
    };

    let selection = state
        .store
        .search_questions(&term)
        .await
        .or_api(ApiError::Internal)?;

    let window = page.window(&selection);
    let Some(first) = selection.first().filter(|_| !window.is_empty()) else {
        tracing::debug!(term = term.as_str(), page = page.page, "no matches");
        return Err(ApiError::NotFound);
    };

    let current_category = state
        .store
        .get_category(first.category)
        .await
        .or_api(ApiError::Internal)?
        .map(|c| c.kind);

    Ok(Json(SearchResponse {
        success: true,
        questions: window.to_vec(),
        total_questions: selection.len(),
        current_category,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route(
            "/questions/{id}",
            delete(delete_question).fallback(id_method_not_allowed),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_string_numbers() {
        let req: CreateQuestionRequest = serde_json::from_str(
            r#"{"question": "Q?", "answer": "A", "category": "4", "difficulty": 2}"#,
        )
        .unwrap();
        let new = req.validate().unwrap();
        assert_eq!((new.category, new.difficulty), (4, 2));
    }

    #[test]
    fn create_request_rejects_unknown_fields() {
        let parsed = serde_json::from_str::<CreateQuestionRequest>(
            r#"{"question": "Q?", "answer": "A", "category": 1, "difficulty": 1, "rating": 5}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn search_request_requires_exact_key() {
        let req: SearchRequest = serde_json::from_str(r#"{"searchTerm": null}"#).unwrap();
        assert!(req.search_term.is_none());
        assert!(serde_json::from_str::<SearchRequest>(r#"{"searc": "invent"}"#).is_err());
    }

    #[test]
    fn created_response_is_flat() {
        let response = CreatedQuestionResponse {
            question: Question {
                id: 24,
                question: "Q?".into(),
                answer: "A".into(),
                category: 6,
                difficulty: 1,
            },
            success: true,
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            serde_json::json!({
                "id": 24,
                "question": "Q?",
                "answer": "A",
                "category": 6,
                "difficulty": 1,
                "success": true
            })
        );
    }
}
