//! trivia-server: HTTP API backing the trivia game
//!
//! Lists categories, pages and searches questions, creates and deletes
//! questions, and serves randomized quiz questions.
//!
//! Layers, leaf-first:
//! - [`models`] - records, validated request values, pagination and quiz selection
//! - [`db`] - schema, connection pool and the [`db::TriviaStore`] repositories
//! - [`http`] - axum handlers, error envelope and server bootstrap

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::ServerConfig;
pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerError};
