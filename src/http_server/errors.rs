//! # HTTP API Errors
//!
//! Every failure leaving this server is serialized as the
//! `{error: true, message}` envelope; only the status code varies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::library::LibraryError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A query parameter failed to parse
    #[error("invalid query parameter {name}: {value}")]
    InvalidQueryParam { name: String, value: String },

    /// Invalid request body
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Referential conflict
    #[error("{0}")]
    Conflict(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Internal fault; the message carries the underlying error text
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQueryParam { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ProductNotFound(_) => ApiError::NotFound(err.to_string()),
            CatalogError::UnknownCategory(_) | CatalogError::UnknownUom(_) => {
                ApiError::Conflict(err.to_string())
            }
            CatalogError::Store(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<LibraryError> for ApiError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::AuthorNotFound(_) | LibraryError::BookNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            LibraryError::UnknownAuthor(_) | LibraryError::AuthorInUse { .. } => {
                ApiError::Conflict(err.to_string())
            }
            LibraryError::MissingAuthorName | LibraryError::MissingBookTitle => {
                ApiError::InvalidBody(err.to_string())
            }
            LibraryError::Store(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            error: true,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorBody::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidQueryParam {
                name: "limit".to_string(),
                value: "abc".to_string(),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("product 1 not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_catalog_not_found_maps_to_404() {
        let err = ApiError::from(CatalogError::ProductNotFound(9));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "product 9 not found");
    }

    #[test]
    fn test_library_referential_errors_map_to_409() {
        let err = ApiError::from(LibraryError::AuthorInUse { id: 1, count: 2 });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err = ApiError::from(LibraryError::UnknownAuthor(5));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_envelope_shape() {
        let err = ApiError::NotFound("product 1 not found".to_string());
        let body = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "product 1 not found");
    }
}
