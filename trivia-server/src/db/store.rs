//! Storage seam used by the HTTP handlers

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Category, NewQuestion, Question, SearchTerm};
use super::repos::{CategoryRepo, DbError, QuestionRepo};

/// Everything the handlers need from storage.
///
/// List operations return rows ordered by id. `get_*` return `Ok(None)`
/// for missing rows; `delete_question` fails with [`DbError::NotFound`].
#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError>;

    async fn list_questions(&self) -> Result<Vec<Question>, DbError>;

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError>;

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>, DbError>;

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError>;

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError>;

    async fn delete_question(&self, id: i32) -> Result<(), DbError>;

    async fn count_questions(&self) -> Result<i64, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list_for_category(category).await
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).insert(new).await
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        QuestionRepo::new(&self.pool).count().await
    }
}
