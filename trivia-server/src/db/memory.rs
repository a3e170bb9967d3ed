//! In-process store backing the router tests
//!
//! Mirrors [`PgStore`](super::PgStore) semantics: id ordering, ids never
//! reused after delete, case-insensitive literal search.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Category, NewQuestion, Question, SearchTerm};
use super::repos::DbError;
use super::store::TriviaStore;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    /// Highest question id ever handed out or seeded
    last_question_id: i32,
}

/// In-memory [`TriviaStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with categories and questions.
    ///
    /// Question ids are kept as given; new ids continue after the largest.
    pub fn seeded(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let last_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        Self {
            tables: RwLock::new(Tables {
                categories: categories.into_iter().map(|c| (c.id, c)).collect(),
                questions: questions.into_iter().map(|q| (q.id, q)).collect(),
                last_question_id,
            }),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| term.matches(&q.question))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;
        let id = tables
            .last_question_id
            .max(0)
            .checked_add(1)
            .ok_or(DbError::IdsExhausted { resource: "question" })?;
        tables.last_question_id = id;

        let question = new.with_id(id);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("question", id))
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        Ok(self.tables.read().await.questions.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32, text: &str, category: i32) -> Question {
        Question {
            id,
            question: text.to_owned(),
            answer: "answer".to_owned(),
            category,
            difficulty: 2,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::seeded(
            vec![Category::new(1, "Science"), Category::new(2, "Art")],
            vec![
                question(5, "Who invented the telephone?", 1),
                question(2, "Which painter cut off his ear?", 2),
                question(9, "What did Edison INVENT first?", 1),
            ],
        )
    }

    #[tokio::test]
    async fn lists_in_id_order() {
        let ids: Vec<i32> = store()
            .list_questions()
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[tokio::test]
    async fn missing_rows_are_none() {
        let store = store();
        assert_eq!(store.get_question(404).await.unwrap(), None);
        assert_eq!(store.get_category(404).await.unwrap(), None);
        assert_eq!(store.get_category(2).await.unwrap(), Some(Category::new(2, "Art")));
    }

    #[tokio::test]
    async fn filters_by_category_and_term() {
        let store = store();
        let science = store.questions_by_category(1).await.unwrap();
        assert_eq!(science.iter().map(|q| q.id).collect::<Vec<_>>(), vec![5, 9]);

        let term = SearchTerm::new(Some("invent".into())).unwrap();
        let found = store.search_questions(&term).await.unwrap();
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![5, 9]);
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let store = store();
        let new = NewQuestion {
            question: "q".into(),
            answer: "a".into(),
            category: 1,
            difficulty: 1,
        };

        let first = store.insert_question(new.clone()).await.unwrap();
        assert_eq!(first.id, 10);
        store.delete_question(first.id).await.unwrap();

        let second = store.insert_question(new).await.unwrap();
        assert_eq!(second.id, 11);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = store();
        assert_eq!(store.count_questions().await.unwrap(), 3);
        store.delete_question(5).await.unwrap();
        assert_eq!(store.count_questions().await.unwrap(), 2);
        assert!(matches!(
            store.delete_question(5).await,
            Err(DbError::NotFound { resource: "question", .. })
        ));
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = MemoryStore::new();
        let created = store
            .insert_question(NewQuestion {
                question: "q".into(),
                answer: "a".into(),
                category: 1,
                difficulty: 1,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn insert_after_max_id_fails_instead_of_wrapping() {
        let store = MemoryStore::seeded(vec![], vec![question(i32::MAX, "last one?", 1)]);
        let result = store
            .insert_question(NewQuestion {
                question: "q".into(),
                answer: "a".into(),
                category: 1,
                difficulty: 1,
            })
            .await;

        assert!(matches!(result, Err(DbError::IdsExhausted { resource: "question" })));
        assert_eq!(store.count_questions().await.unwrap(), 1);
    }
}
