use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::core::models::ErrorResponse;
use crate::errors::SummarizerError;

impl SummarizerError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            SummarizerError::EmptyContent | SummarizerError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            SummarizerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SummarizerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
