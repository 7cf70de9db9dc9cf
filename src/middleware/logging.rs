//! Request logging middleware.
//!
//! Logs every HTTP request with method, path, status code, and latency.
//! Auth-gate rejections are logged with whether a `datatoken` was supplied
//! at all, which separates "client forgot the token" from "token was bad"
//! without ever logging the token itself.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    // Skip logging for health checks to reduce noise
    if path == "/health" {
        return next.run(request).await;
    }

    let token_supplied = query_has_token(request.uri().query());
    let start = Instant::now();

    let response = next.run(request).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            "Request failed"
        );
    } else if status == StatusCode::UNAUTHORIZED {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            token_supplied,
            "Request rejected by auth gate"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            "Request completed"
        );
    }

    response
}

/// Whether the query string carries a non-empty `datatoken`. Presence only;
/// the value never reaches the logs.
fn query_has_token(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        q.split('&')
            .any(|pair| matches!(pair.strip_prefix("datatoken="), Some(v) if !v.is_empty()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_has_token() {
        assert!(query_has_token(Some("datatoken=abc.def.ghi")));
        assert!(query_has_token(Some("page=2&datatoken=tok")));
        assert!(!query_has_token(Some("datatoken=")));
        assert!(!query_has_token(Some("token=abc")));
        assert!(!query_has_token(None));
    }
}
