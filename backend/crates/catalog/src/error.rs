//! Catalog Error Types
//!
//! Catalog-specific variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{ProductId, RecipeId};
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Field-level validation failure
    #[error("{0}")]
    Validation(String),

    #[error("Product with id {0} not found")]
    ProductNotFound(ProductId),

    #[error("Recipe with id {0} not found")]
    RecipeNotFound(RecipeId),

    /// The authenticated caller has no user row to own the new entry
    #[error("User not found")]
    OwnerNotFound,

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::ProductNotFound(_)
            | CatalogError::RecipeNotFound(_)
            | CatalogError::OwnerNotFound => ErrorKind::NotFound,
            CatalogError::Forbidden(_) => ErrorKind::Forbidden,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::Forbidden(reason) => {
                tracing::warn!(reason = %reason, "Forbidden catalog operation");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            CatalogError::Validation(err.message().to_string())
        } else {
            CatalogError::Internal(err.to_string())
        }
    }
}
