//! Auth Error Types
//!
//! Auth-specific variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::UserId;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

pub const REGISTRATION_RULES: &str = "Username must be at least 4 characters long, password must be at least 6 characters long, and a valid email must be provided.";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Login body without a username or password
    #[error("Invalid data provided")]
    MissingCredentials,

    /// Unknown user or wrong password. Deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("{}", REGISTRATION_RULES)]
    RegistrationInvalid,

    /// Field-level validation failure
    #[error("{0}")]
    Validation(String),

    #[error("A user with this username already exists")]
    UserNameTaken,

    #[error("A user with this email already exists")]
    EmailTaken,

    #[error("Either ID or username must be provided")]
    MissingLookupKey,

    #[error("User not found")]
    UserNotFound,

    #[error("User with id {0} not found")]
    UserIdNotFound(UserId),

    #[error("Missing bearer token")]
    MissingToken,

    /// Bad signature, expired, or names a user that no longer exists
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::RegistrationInvalid
            | AuthError::Validation(_)
            | AuthError::UserNameTaken
            | AuthError::EmailTaken => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::MissingToken | AuthError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            AuthError::Forbidden(_) => ErrorKind::Forbidden,
            AuthError::MissingLookupKey | AuthError::UserNotFound | AuthError::UserIdNotFound(_) => {
                ErrorKind::NotFound
            }
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Server-side details stay in the log.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            AuthError::Forbidden(reason) => {
                tracing::warn!(reason = %reason, "Forbidden user operation");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Value objects report through `AppError`. Client errors keep their message.
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
