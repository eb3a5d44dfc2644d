//! Custom Axum extractors
//!
//! Both rejections here convert to the failure envelope so a bad path
//! id or an undecodable body never falls through to a framework
//! default response.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use storefront_core::ValidationError;

use super::error::ApiError;

/// Extract and parse an integer user id from the `{id}` path segment.
/// A non-numeric id is rejected before any query runs.
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::BadRequest {
            message: format!("invalid user id '{raw}'"),
        })?;

        Ok(Self(id))
    }
}

/// JSON body extractor whose rejection becomes the envelope 400.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: format!("invalid request body: {}", rejection.body_text()),
            })?;

        Ok(Self(value))
    }
}
