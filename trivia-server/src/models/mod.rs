//! Domain models with validation at construction
//!
//! Request input is validated once, when converting into these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod question;
pub mod pagination;
pub mod search;
pub mod quiz;

pub use validation::{LooseInt, ValidationError};
pub use question::{Category, CategoryMap, NewQuestion, Question};
pub use pagination::{Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use search::SearchTerm;
pub use quiz::QuizFilter;
