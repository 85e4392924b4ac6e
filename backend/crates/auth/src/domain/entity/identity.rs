//! Authenticated caller
//!
//! Built from a verified token and the user row it names. Handlers receive it
//! through request extensions and apply the ownership rule themselves.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
    pub role: UserRole,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Owner-or-admin rule for mutations on anything with an owner.
    pub fn can_modify(&self, owner: UserId) -> bool {
        self.is_admin() || self.user_id == owner
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.as_str().to_string(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: i32, role: UserRole) -> Identity {
        Identity {
            user_id: UserId::from_i32(id),
            username: format!("user{id}"),
            role,
        }
    }

    #[test]
    fn test_owner_can_modify() {
        assert!(identity(1, UserRole::User).can_modify(UserId::from_i32(1)));
    }

    #[test]
    fn test_stranger_cannot_modify() {
        assert!(!identity(1, UserRole::User).can_modify(UserId::from_i32(2)));
    }

    #[test]
    fn test_admin_can_modify_anything() {
        assert!(identity(1, UserRole::Admin).can_modify(UserId::from_i32(2)));
    }
}
