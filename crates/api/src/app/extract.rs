//! Request extractors that reject with the crate's JSON error body.
//!
//! Axum's own `Json` / `Path` rejections answer in plain text; these wrappers
//! keep their status codes and route the message through
//! [`errors::json_error`](crate::app::errors::json_error).

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderValue, header::CONTENT_TYPE, request::Parts},
    response::Response,
};
use serde::de::DeserializeOwned;

use crate::app::errors::json_error;

pub const INVALID_REQUEST: &str = "invalid_request";

/// JSON body extractor.
///
/// A request with no `Content-Type` is read as JSON; any other non-JSON
/// content type is still rejected with 415.
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        req.headers_mut()
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));

        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_error(rejection.status(), INVALID_REQUEST, rejection.body_text())),
        }
    }
}

/// Path parameter extractor.
pub struct ApiPath<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_error(rejection.status(), INVALID_REQUEST, rejection.body_text())),
        }
    }
}
