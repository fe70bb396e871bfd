//! Post Error Types
//!
//! This module provides post-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. The JSON API
//! surface signals these as status codes; the HTML surface converts
//! them into redirects, re-rendered forms, or bare status pages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Post-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Required fields (title, body) missing or blank at creation
    #[error("Invalid data")]
    InvalidData,

    /// No authenticated session on a mutating operation
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated but not the owner of the post
    #[error("Forbidden")]
    Forbidden,

    /// No such post
    #[error("Not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::InvalidData => StatusCode::BAD_REQUEST,
            PostError::Unauthorized => StatusCode::UNAUTHORIZED,
            PostError::Forbidden => StatusCode::FORBIDDEN,
            PostError::NotFound => StatusCode::NOT_FOUND,
            PostError::Database(_) | PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::InvalidData => ErrorKind::BadRequest,
            PostError::Unauthorized => ErrorKind::Unauthorized,
            PostError::Forbidden => ErrorKind::Forbidden,
            PostError::NotFound => ErrorKind::NotFound,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            // Generic message only; details stay in the server log
            AppError::new(self.kind(), "Server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Post internal error");
            }
            PostError::Forbidden => {
                tracing::warn!("Forbidden post mutation attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Post error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
