use crate::models::TaskId;
use axum::http::StatusCode;
use thiserror::Error;

/// Recoverable failures of tracker commands. A failed command leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("{0}")]
    Validation(String),

    #[error("task {0} not found")]
    NotFound(TaskId),

    #[error("invalid date key: {0:?}")]
    InvalidDateKey(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::NotFound(_) => Self::not_found(err.to_string()),
            TrackerError::Validation(_) | TrackerError::InvalidDateKey(_) => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
