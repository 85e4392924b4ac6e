//! Update User Use Case
//!
//! Partial self-service update. Order of checks: caller may act on the
//! target, target exists, then each supplied field.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::entity::{Identity, User, UserChanges};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(
        &self,
        caller: &Identity,
        target: UserId,
        input: UpdateUserInput,
    ) -> AuthResult<User> {
        if !caller.can_modify(target) {
            return Err(AuthError::Forbidden(
                "You can only update your own account unless you are an admin.",
            ));
        }

        if self.user_repo.find_by_id(target).await?.is_none() {
            return Err(AuthError::UserIdNotFound(target));
        }

        let email = input.email.map(|e| Email::new(e)).transpose()?;
        let username = input.username.map(|u| UserName::new(u)).transpose()?;
        let password = input.password.map(RawPassword::new).transpose()?;

        if let Some(username) = &username {
            if let Some(other) = self.user_repo.find_by_username(username.as_str()).await? {
                if other.id != target {
                    return Err(AuthError::UserNameTaken);
                }
            }
        }

        if let Some(email) = &email {
            if let Some(other) = self.user_repo.find_by_email(email.as_str()).await? {
                if other.id != target {
                    return Err(AuthError::EmailTaken);
                }
            }
        }

        let password = password
            .map(|raw| UserPassword::from_raw(&raw, self.config.pepper()))
            .transpose()?;

        let changes = UserChanges {
            username,
            email,
            password,
        };

        let user = self
            .user_repo
            .update(target, &changes)
            .await?
            .ok_or(AuthError::UserIdNotFound(target))?;

        tracing::info!(
            user_id = %target,
            updated_by = %caller.user_id,
            password_changed = changes.password.is_some(),
            "User updated"
        );

        Ok(user)
    }
}
