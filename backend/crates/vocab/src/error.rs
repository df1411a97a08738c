//! Vocab Error Types
//!
//! This module provides vocab-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Vocab-specific result type alias
pub type VocabResult<T> = Result<T, VocabError>;

/// Vocab-specific error variants
///
/// Dictionary lookup problems never show up here; the enrichment path
/// absorbs them.
#[derive(Debug, Error)]
pub enum VocabError {
    /// No word with that id belongs to the caller
    #[error("Word not found")]
    NotFound,

    /// Malformed or blank input
    #[error("Invalid input")]
    InvalidInput,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VocabError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            VocabError::NotFound => StatusCode::NOT_FOUND,
            VocabError::InvalidInput => StatusCode::BAD_REQUEST,
            VocabError::Database(_) | VocabError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VocabError::NotFound => ErrorKind::NotFound,
            VocabError::InvalidInput => ErrorKind::BadRequest,
            VocabError::Database(_) | VocabError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            VocabError::Database(e) => {
                tracing::error!(error = %e, "Vocab database error");
            }
            VocabError::Internal(msg) => {
                tracing::error!(message = %msg, "Vocab internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Vocab error");
            }
        }
    }
}

impl From<VocabError> for AppError {
    fn from(err: VocabError) -> Self {
        match err {
            VocabError::Database(e) => AppError::from(e),
            VocabError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for VocabError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
