//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;

use crate::models::{Pagination, PaginationParams};
use super::error::ApiError;

/// Integer id from the path.
///
/// A non-integer segment is answered like an unmatched route: 404.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        let id = raw.parse::<i32>().map_err(|_| {
            tracing::debug!(id = %raw, "non-integer id in path");
            ApiError::NotFound
        })?;

        Ok(Self(id))
    }
}

/// Method fallback for routes with an `{id}` segment.
///
/// The id is checked first, so `/questions/abc` is 404 for every method and
/// only a well-formed id reaches 405.
pub async fn id_method_not_allowed(IdPath(_): IdPath) -> ApiError {
    ApiError::MethodNotAllowed
}

/// `?page=` window; never rejects, falling back to page 1.
pub struct Page(pub Pagination);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Self(Pagination::from(params)))
    }
}
