use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use inkpost_core::DomainResult;

use crate::app::errors;

/// 200 with the JSON-encoded value, or the mapped domain error.
pub fn respond<T: Serialize>(result: DomainResult<T>) -> axum::response::Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
