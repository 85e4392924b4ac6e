//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User, UserChanges};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user and return the stored row
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    async fn find_by_id(&self, id: UserId) -> AuthResult<Option<User>>;

    /// Exact, case-sensitive match
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Apply a partial update. `None` when the user does not exist.
    async fn update(&self, id: UserId, changes: &UserChanges) -> AuthResult<Option<User>>;

    /// Delete the user; owned products and recipes go with it.
    /// Returns whether a row was removed.
    async fn delete(&self, id: UserId) -> AuthResult<bool>;
}
