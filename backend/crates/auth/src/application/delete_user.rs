//! Delete User Use Case
//!
//! The store cascades the delete to the user's products and recipes.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::Identity;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct DeleteUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, caller: &Identity, target: UserId) -> AuthResult<()> {
        if !caller.can_modify(target) {
            return Err(AuthError::Forbidden(
                "You can only delete your own account unless you are an admin.",
            ));
        }

        if self.user_repo.find_by_id(target).await?.is_none() {
            return Err(AuthError::UserIdNotFound(target));
        }

        if !self.user_repo.delete(target).await? {
            return Err(AuthError::UserIdNotFound(target));
        }

        tracing::info!(user_id = %target, deleted_by = %caller.user_id, "User deleted");

        Ok(())
    }
}
