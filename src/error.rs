use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};

use crate::api::response;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    FetchError(String),

    #[error("error parsing XML: {0}")]
    ParseError(String),

    #[error("no items found in the feed")]
    EmptyFeed,

    #[error("no blockquote found in the most recent item")]
    NoBlockquote,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        response::plain_text(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching verse: {}", self),
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(format!("error fetching RSS feed: {}", err))
    }
}

impl From<quick_xml::DeError> for AppError {
    fn from(err: quick_xml::DeError) -> Self {
        AppError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
