//! Get User Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Lookup key. `id` wins when both are present.
pub struct GetUserQuery {
    pub id: Option<UserId>,
    pub username: Option<String>,
}

pub struct GetUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, query: GetUserQuery) -> AuthResult<User> {
        let user = match (query.id, query.username.filter(|u| !u.is_empty())) {
            (Some(id), _) => self.user_repo.find_by_id(id).await?,
            (None, Some(username)) => self.user_repo.find_by_username(&username).await?,
            (None, None) => return Err(AuthError::MissingLookupKey),
        };

        user.ok_or(AuthError::UserNotFound)
    }
}
