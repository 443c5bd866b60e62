use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::forms::FormError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed form: {0}")]
    MalformedForm(#[from] FormError),

    #[error("Render error: {0}")]
    RenderError(#[from] std::fmt::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedForm { .. } => StatusCode::BAD_REQUEST,
            AppError::RenderError { .. } | AppError::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        warn!(status = %status, error = %self, "Request failed");

        (status, self.to_string()).into_response()
    }
}
