//! Quiz question selection

use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

use super::{LooseInt, Question, ValidationError};

/// Category id meaning "every category"
pub const ALL_CATEGORIES: i32 = 0;

/// Which questions a quiz round may draw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFilter {
    /// `None` draws from all questions
    pub category: Option<i32>,
    /// Ids already served this game
    pub previous: HashSet<i32>,
}

impl QuizFilter {
    /// Validate the quiz request values.
    ///
    /// Both the category id and the previous-question list must be present;
    /// id 0 selects all categories.
    pub fn new(
        category_id: Option<LooseInt>,
        previous_questions: Option<Vec<i64>>,
    ) -> Result<Self, ValidationError> {
        let id = category_id
            .ok_or(ValidationError::Missing { field: "quiz_category.id" })?
            .to_i32("quiz_category.id")?;
        let previous = previous_questions
            .ok_or(ValidationError::Missing { field: "previous_questions" })?;

        Ok(Self {
            category: (id != ALL_CATEGORIES).then_some(id),
            // ids outside i32 can never match a stored question
            previous: previous
                .into_iter()
                .filter_map(|id| i32::try_from(id).ok())
                .collect(),
        })
    }

    /// Pick one question uniformly at random from `candidates` minus the
    /// previously served ids. `None` once every candidate has been served.
    pub fn pick<R>(&self, candidates: Vec<Question>, rng: &mut R) -> Option<Question>
    where
        R: Rng + ?Sized,
    {
        candidates
            .into_iter()
            .filter(|q| !self.previous.contains(&q.id))
            .choose(rng)
    }
}
