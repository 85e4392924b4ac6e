//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword, user_role::UserRole,
};

/// Stored user. The password hash never leaves the crate through a DTO.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: UserName,
    pub email: Email,
    pub password: UserPassword,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated registration, ready to insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub email: Email,
    pub password: UserPassword,
}

/// Partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<UserName>,
    pub email: Option<Email>,
    pub password: Option<UserPassword>,
}
