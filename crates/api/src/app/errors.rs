use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use inkpost_core::{DomainError, Resource};

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let detail = err.to_string();
    match err {
        DomainError::Conflict => json_error(StatusCode::BAD_REQUEST, "conflict", detail),
        DomainError::Unauthorized => json_error(StatusCode::UNAUTHORIZED, "unauthorized", detail),
        DomainError::Forbidden => json_error(StatusCode::FORBIDDEN, "forbidden", detail),
        DomainError::NotFound(Resource::Users) => {
            json_error(StatusCode::BAD_REQUEST, "not_found", detail)
        }
        DomainError::NotFound(Resource::Post) => json_error(StatusCode::NOT_FOUND, "not_found", detail),
        DomainError::Storage(msg) => {
            tracing::error!("storage failure: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", detail)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    detail: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "detail": detail.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn status_codes_follow_the_taxonomy() {
        let cases = [
            (DomainError::Conflict, StatusCode::BAD_REQUEST),
            (DomainError::Unauthorized, StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden, StatusCode::FORBIDDEN),
            (DomainError::not_found(Resource::Users), StatusCode::BAD_REQUEST),
            (DomainError::not_found(Resource::Post), StatusCode::NOT_FOUND),
            (DomainError::storage("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(domain_error_to_response(err).status(), status);
        }
    }

    #[tokio::test]
    async fn body_carries_code_and_detail() {
        let resp = domain_error_to_response(DomainError::Forbidden);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "forbidden");
        assert_eq!(body["detail"], "You are not the author of this post");
    }
}
