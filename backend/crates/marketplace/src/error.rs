//! Marketplace Error Types
//!
//! This module provides marketplace-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::media::MediaError;
use thiserror::Error;

/// Marketplace-specific result type alias
pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

/// Marketplace-specific error variants
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// Malformed or missing request input
    #[error("{0}")]
    Validation(String),

    /// Request carries no valid session
    #[error("Not authenticated")]
    Unauthenticated,

    /// Authenticated, but not the owner of the resource
    #[error("Forbidden")]
    Forbidden,

    /// Resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Image upload failed at the media host
    #[error("Media upload failed: {0}")]
    Media(#[from] MediaError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarketplaceError {
    pub fn not_found(what: &str) -> Self {
        MarketplaceError::NotFound(format!("{what} not found"))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MarketplaceError::Validation(_) => StatusCode::BAD_REQUEST,
            MarketplaceError::Unauthenticated => StatusCode::UNAUTHORIZED,
            MarketplaceError::Forbidden => StatusCode::FORBIDDEN,
            MarketplaceError::NotFound(_) => StatusCode::NOT_FOUND,
            MarketplaceError::Media(_)
            | MarketplaceError::Database(_)
            | MarketplaceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketplaceError::Validation(_) => ErrorKind::BadRequest,
            MarketplaceError::Unauthenticated => ErrorKind::Unauthorized,
            MarketplaceError::Forbidden => ErrorKind::Forbidden,
            MarketplaceError::NotFound(_) => ErrorKind::NotFound,
            MarketplaceError::Media(_)
            | MarketplaceError::Database(_)
            | MarketplaceError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Server errors collapse to an opaque message;
    /// detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MarketplaceError::Database(e) => {
                tracing::error!(error = %e, "Marketplace database error");
            }
            MarketplaceError::Media(e) => {
                tracing::error!(error = %e, "Media host error");
            }
            MarketplaceError::Internal(msg) => {
                tracing::error!(message = %msg, "Marketplace internal error");
            }
            MarketplaceError::Forbidden => {
                tracing::warn!("Ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Marketplace error");
            }
        }
    }
}

impl IntoResponse for MarketplaceError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for MarketplaceError {
    fn from(err: AppError) -> Self {
        MarketplaceError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            MarketplaceError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MarketplaceError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            MarketplaceError::Forbidden.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            MarketplaceError::not_found("Product").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_server_errors_are_opaque() {
        let err = MarketplaceError::Internal("pool exhausted".into());
        assert_eq!(err.to_app_error().message(), "Server error");

        let err = MarketplaceError::not_found("Product");
        assert_eq!(err.to_app_error().message(), "Product not found");
    }
}
