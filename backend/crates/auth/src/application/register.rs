//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct RegisterInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        // One combined message whichever field is wrong.
        let (Some(username), Some(email), Some(password)) =
            (input.username, input.email, input.password)
        else {
            return Err(AuthError::RegistrationInvalid);
        };
        let username = UserName::new(username).map_err(|_| AuthError::RegistrationInvalid)?;
        let email = Email::new(email).map_err(|_| AuthError::RegistrationInvalid)?;
        let password = RawPassword::new(password).map_err(|_| AuthError::RegistrationInvalid)?;

        if self
            .user_repo
            .find_by_username(username.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::UserNameTaken);
        }

        if self.user_repo.find_by_email(email.as_str()).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password = UserPassword::from_raw(&password, self.config.pepper())?;

        let user = self
            .user_repo
            .create(&NewUser {
                username,
                email,
                password,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }
}
