//! Client Error Types

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A protected call was made with an anonymous session
    #[error("Not logged in")]
    NotAuthenticated,

    /// The server answered with a problem-details body
    #[error("{message} ({status})")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the stored credentials should be thrown away.
    pub fn ends_session(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
