//! Question repository
//!
//! Handles question CRUD:
//! - insert: single INSERT ... RETURNING (id generated by the database)
//! - delete: exactly one row or NotFound
//! - search: ILIKE with escaped wildcards

use sqlx::PgPool;

use crate::models::{NewQuestion, Question, SearchTerm};
use super::DbError;

const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Single question, `None` when absent.
    pub async fn get(&self, id: i32) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(question)
    }

    /// Questions in one category ordered by id.
    pub async fn list_for_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions whose text contains `term`, case-insensitively.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            r"SELECT {COLUMNS} FROM questions WHERE question ILIKE $1 ESCAPE '\' ORDER BY id"
        ))
        .bind(term.like_pattern())
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Insert a question and return the stored row.
    pub async fn insert(&self, new: NewQuestion) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(&format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Delete one question by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("question", id));
        }
        Ok(())
    }

    /// Total number of questions.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, schema::ensure_schema};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        ensure_schema(&pool).await.expect("schema failed");
        pool
    }

    fn new_question(text: &str) -> NewQuestion {
        NewQuestion {
            question: text.to_owned(),
            answer: "Michael Jordan".to_owned(),
            category: 6,
            difficulty: 1,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_get_delete_round() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);

        let before = repo.count().await.unwrap();
        let created = repo
            .insert(new_question("Who is the best basketball player of all time?"))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), before + 1);
        assert_eq!(repo.get(created.id).await.unwrap(), Some(created.clone()));

        repo.delete(created.id).await.unwrap();
        assert_eq!(repo.get(created.id).await.unwrap(), None);
        assert!(matches!(
            repo.delete(created.id).await,
            Err(DbError::NotFound { resource: "question", .. })
        ));
        assert_eq!(repo.count().await.unwrap(), before);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_treats_percent_literally() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);

        let created = repo
            .insert(new_question("What is 100% of zzq-marker?"))
            .await
            .unwrap();
        let term = SearchTerm::new(Some("0% OF ZZQ".into())).unwrap();
        let found = repo.search(&term).await.unwrap();
        assert!(found.iter().any(|q| q.id == created.id));

        let wildcard = SearchTerm::new(Some("zzq%marker".into())).unwrap();
        assert!(repo.search(&wildcard).await.unwrap().is_empty());

        repo.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn lists_are_ordered_by_id() {
        let pool = pool().await;
        let ids: Vec<i32> = QuestionRepo::new(&pool)
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
