//! Login Use Case
//!
//! Checks a username/password pair and issues a bearer token.

use std::fmt;
use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_password::RawPassword, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct LoginOutput {
    pub access_token: String,
    pub user_name: String,
    pub user_role: UserRole,
    pub user_id: UserId,
}

impl fmt::Debug for LoginOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginOutput")
            .field("access_token", &"[REDACTED]")
            .field("user_name", &self.user_name)
            .field("user_role", &self.user_role)
            .field("user_id", &self.user_id)
            .finish()
    }
}

pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let (Some(username), Some(password)) = (
            input.username.filter(|u| !u.is_empty()),
            input.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::MissingCredentials);
        };

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let candidate = RawPassword::candidate(password);
        if !user.password.verify(&candidate, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self
            .config
            .signer()
            .issue(&user.id.to_string(), user.username.as_str())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(LoginOutput {
            access_token,
            user_name: user.username.into_inner(),
            user_role: user.role,
            user_id: user.id,
        })
    }
}
