//! API error envelope with IntoResponse
//!
//! Every failure collapses to one of five kinds, each with a fixed status
//! and message. Handlers pick the kind per endpoint; the root cause is
//! logged here and never sent to the client.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with fixed HTTP status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 400
    #[error("bad request")]
    BadRequest,

    /// 404
    #[error("resource not found")]
    NotFound,

    /// 405
    #[error("method not allowed")]
    MethodNotAllowed,

    /// 422
    #[error("unprocessable")]
    Unprocessable,

    /// 500
    #[error("internal server error")]
    Internal,
}

/// `{success: false, error, message}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; clients match on these strings.
    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::Unprocessable => "Unprocessable",
            Self::Internal => "Internal server error",
        }
    }

    pub fn body(self) -> ErrorBody {
        ErrorBody {
            success: false,
            error: self.status().as_u16(),
            message: self.message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Map a lower-level failure onto the endpoint's error kind, logging the cause.
pub trait ResultExt<T> {
    fn or_api(self, kind: ApiError) -> Result<T, ApiError>;
}

impl<T> ResultExt<T> for Result<T, DbError> {
    fn or_api(self, kind: ApiError) -> Result<T, ApiError> {
        self.map_err(|e| {
            match &e {
                DbError::NotFound { .. } => {
                    tracing::debug!(error = %e, status = kind.status().as_u16(), "lookup failed")
                }
                DbError::Sqlx(_) | DbError::IdsExhausted { .. } => {
                    tracing::error!(error = %e, status = kind.status().as_u16(), "storage error")
                }
            }
            kind
        })
    }
}

impl<T> ResultExt<T> for Result<T, ValidationError> {
    fn or_api(self, kind: ApiError) -> Result<T, ApiError> {
        self.map_err(|e| {
            tracing::debug!(error = %e, status = kind.status().as_u16(), "validation failed");
            kind
        })
    }
}

impl<T> ResultExt<T> for Result<T, JsonRejection> {
    fn or_api(self, kind: ApiError) -> Result<T, ApiError> {
        self.map_err(|e| {
            tracing::debug!(error = %e, status = kind.status().as_u16(), "rejected request body");
            kind
        })
    }
}

/// Response for a panicking handler (used by `CatchPanicLayer`).
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };
    tracing::error!(panic = %detail, "handler panicked");

    ApiError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_envelope() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "error": 404, "message": "Resource not found"})
        );
    }

    #[tokio::test]
    async fn every_kind_has_matching_code() {
        for (kind, code, message) in [
            (ApiError::BadRequest, 400, "Bad request"),
            (ApiError::NotFound, 404, "Resource not found"),
            (ApiError::MethodNotAllowed, 405, "Method not allowed"),
            (ApiError::Unprocessable, 422, "Unprocessable"),
            (ApiError::Internal, 500, "Internal server error"),
        ] {
            let response = kind.into_response();
            assert_eq!(response.status().as_u16(), code);
            let body = body_json(response).await;
            assert_eq!(body["error"], code);
            assert_eq!(body["message"], message);
            assert_eq!(body["success"], false);
        }
    }

    #[test]
    fn db_errors_take_the_endpoint_kind() {
        let missing: Result<(), DbError> = Err(DbError::not_found("question", 7));
        assert_eq!(missing.or_api(ApiError::NotFound), Err(ApiError::NotFound));

        let broken: Result<(), DbError> = Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert_eq!(broken.or_api(ApiError::Unprocessable), Err(ApiError::Unprocessable));
    }

    #[test]
    fn validation_errors_take_the_endpoint_kind() {
        let invalid: Result<(), ValidationError> =
            Err(ValidationError::Missing { field: "answer" });
        assert_eq!(invalid.or_api(ApiError::Unprocessable), Err(ApiError::Unprocessable));

        let fine: Result<u8, ValidationError> = Ok(3);
        assert_eq!(fine.or_api(ApiError::BadRequest), Ok(3));
    }

    #[tokio::test]
    async fn panic_becomes_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "Internal server error");
    }
}
