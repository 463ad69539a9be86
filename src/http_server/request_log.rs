//! Per-request logging middleware.
//!
//! Tags each request with a UUID, echoes it in `x-request-id`, and logs
//! one `HTTP_REQUEST` line when the response is ready. 5xx responses are
//! logged at ERROR.

use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::observability::{Event, Logger, Severity};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    let status = response.status();
    let severity = if status.is_server_error() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(
        severity,
        Event::HttpRequest.as_str(),
        &[
            ("elapsed_ms", started.elapsed().as_millis().to_string().as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
            ("status", status.as_str()),
        ],
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
