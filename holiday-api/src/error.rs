use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use holiday_core::CoreError;

/// Request failures. Every variant answers with an empty body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                StatusCode::NOT_FOUND
            }
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status.into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(id) => AppError::NotFound(format!("holiday {}", id)),
            CoreError::Validation(msg) => AppError::BadRequest(msg),
            err @ CoreError::IdExhausted(_) => AppError::Internal(err.into()),
        }
    }
}
