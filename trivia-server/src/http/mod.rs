//! HTTP server layer
//!
//! Axum server with:
//! - Open CORS
//! - Request tracing
//! - Graceful shutdown
//! - Fixed JSON error envelopes

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerError};
pub use error::ApiError;
