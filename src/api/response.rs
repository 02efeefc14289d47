use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Plain-text response with an explicit UTF-8 content type.
pub fn plain_text(status: StatusCode, body: impl Into<String>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF8))],
        body.into(),
    )
        .into_response()
}

pub fn ok(body: impl Into<String>) -> Response {
    plain_text(StatusCode::OK, body)
}
