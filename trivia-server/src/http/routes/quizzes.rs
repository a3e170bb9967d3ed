//! Quiz endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::{ApiError, ResultExt};
use crate::http::server::AppState;
use crate::models::{LooseInt, Question, QuizFilter, ValidationError};

/// Quiz round request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategoryRequest>,
}

/// Category selector; `type` is the label the frontend echoes back
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizCategoryRequest {
    pub id: Option<LooseInt>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl QuizRequest {
    pub fn validate(self) -> Result<QuizFilter, ValidationError> {
        let category_id = self
            .quiz_category
            .ok_or(ValidationError::Missing { field: "quiz_category" })?
            .id;
        QuizFilter::new(category_id, self.previous_questions)
    }
}

/// Next quiz question; `question` is null once the pool is exhausted
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - random unseen question, optionally within one category
///
/// Every failure, malformed input included, is a 404. An unknown category
/// id is not an error: it has no questions, so `question` is null.
async fn next_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = body.or_api(ApiError::NotFound)?;
    let filter = req.validate().or_api(ApiError::NotFound)?;

    let candidates = match filter.category {
        Some(category) => state.store.questions_by_category(category).await,
        None => state.store.list_questions().await,
    }
    .or_api(ApiError::NotFound)?;

    let question = filter.pick(candidates, &mut rand::thread_rng());
    tracing::debug!(
        category = ?filter.category,
        served = filter.previous.len(),
        picked = ?question.as_ref().map(|q| q.id),
        "quiz question selected"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
