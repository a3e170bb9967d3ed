//! Question and category records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{LooseInt, ValidationError};

/// Question record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// `{id: type}` as served to clients. Integer keys serialize as strings.
pub type CategoryMap = BTreeMap<i32, String>;

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    /// Collapse categories into the client-facing id -> type map.
    pub fn into_map(categories: Vec<Category>) -> CategoryMap {
        categories.into_iter().map(|c| (c.id, c.kind)).collect()
    }
}

/// Validated fields for a question insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Validate raw request fields.
    ///
    /// # Rules
    /// - All four fields present
    /// - Text fields non-empty
    /// - `category` and `difficulty` integers (or numeric strings), non-zero
    ///
    /// Category existence is not checked; dangling references are stored as given.
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        category: Option<LooseInt>,
        difficulty: Option<LooseInt>,
    ) -> Result<Self, ValidationError> {
        let question = required_text(question, "question")?;
        let answer = required_text(answer, "answer")?;
        let category = required_int(category, "category")?;
        let difficulty = required_int(difficulty, "difficulty")?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    /// Attach a generated id, producing the persisted shape.
    pub fn with_id(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some(s) if s.is_empty() => Err(ValidationError::Empty { field }),
        Some(s) => Ok(s),
    }
}

fn required_int(value: Option<LooseInt>, field: &'static str) -> Result<i32, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    match value.to_i32(field)? {
        0 => Err(ValidationError::Empty { field }),
        n => Ok(n),
    }
}
