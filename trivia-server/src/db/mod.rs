//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared through [`PgStore`] - no Arc<Mutex<Connection>>
//! - Lists come back ordered by id
//! - Lookups by id return `Option`; only deletes report NotFound
//! - Writes commit immediately, one statement per request

pub mod pool;
pub mod schema;
pub mod repos;
pub mod store;
pub mod memory;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{CategoryRepo, DbError, QuestionRepo};
pub use store::{PgStore, TriviaStore};
pub use memory::MemoryStore;
