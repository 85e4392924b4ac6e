//! Verify Token Use Case
//!
//! Turns a bearer token into the caller's [`Identity`].

use std::sync::Arc;

use kernel::id::UserId;
use platform::token::TokenError;

use crate::application::config::AuthConfig;
use crate::domain::entity::Identity;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct VerifyTokenUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> VerifyTokenUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<Identity> {
        let claims = self.config.signer().verify(token).map_err(|e| {
            if !matches!(e, TokenError::Expired) {
                tracing::debug!(error = %e, "Token verification failed");
            }
            AuthError::InvalidToken
        })?;

        let user_id: i32 = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;

        // The account may have been deleted after the token was issued.
        let user = self
            .user_repo
            .find_by_id(UserId::from_i32(user_id))
            .await?
            .ok_or(AuthError::InvalidToken)?;

        Ok(Identity::from(&user))
    }
}
