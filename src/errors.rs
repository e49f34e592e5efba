use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("No content found in the document")]
    EmptyContent,

    #[error("Error generating summary: {0}")]
    Generation(String),

    #[error("Failed to extract document text: {0}")]
    Extraction(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizerError {
    fn from(error: anyhow::Error) -> Self {
        SummarizerError::Extraction(format!("{error:#}"))
    }
}

impl From<MultipartError> for SummarizerError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            SummarizerError::PayloadTooLarge(error.body_text())
        } else {
            SummarizerError::InvalidRequest(error.body_text())
        }
    }
}

impl From<MultipartRejection> for SummarizerError {
    fn from(rejection: MultipartRejection) -> Self {
        SummarizerError::InvalidRequest(rejection.body_text())
    }
}
