use std::time::{Duration, Instant};

use axum::{
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Wrap each request in a span carrying a fresh request id, log the outcome,
/// and echo the id back in `x-request-id`.
pub async fn request_context(req: Request<axum::body::Body>, next: Next) -> Response {
    let request_id = Uuid::now_v7();

    let span = tracing::info_span!(
        "request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let started = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = whole_millis(started.elapsed()),
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_millis_truncates_sub_millisecond_part() {
        assert_eq!(whole_millis(Duration::from_micros(25_999)), 25);
    }

    #[test]
    fn whole_millis_saturates_instead_of_wrapping() {
        assert_eq!(whole_millis(Duration::MAX), u64::MAX);
    }
}
