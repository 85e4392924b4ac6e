//! Client Session
//!
//! `Anonymous --login--> Authenticated --logout / 401 / 403--> Anonymous`

use kernel::id::UserId;
use std::fmt;

#[derive(Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        user_id: UserId,
        username: String,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Session::Authenticated { user_id, .. } => Some(*user_id),
            Session::Anonymous => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated { username, .. } => Some(username),
            Session::Anonymous => None,
        }
    }

    /// Drop the token. The server keeps no session, so nothing is sent.
    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Anonymous => f.write_str("Anonymous"),
            Session::Authenticated {
                user_id, username, ..
            } => f
                .debug_struct("Authenticated")
                .field("token", &"[REDACTED]")
                .field("user_id", user_id)
                .field("username", username)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated() -> Session {
        Session::Authenticated {
            token: "secret-token".into(),
            user_id: UserId::from_i32(4),
            username: "alice".into(),
        }
    }

    #[test]
    fn test_accessors() {
        let session = authenticated();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("secret-token"));
        assert_eq!(session.user_id(), Some(UserId::from_i32(4)));
        assert_eq!(session.username(), Some("alice"));

        assert_eq!(Session::default().token(), None);
    }

    #[test]
    fn test_logout() {
        let mut session = authenticated();
        session.logout();
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn test_debug_redacts_token() {
        let output = format!("{:?}", authenticated());
        assert!(!output.contains("secret-token"));
        assert!(output.contains("alice"));
    }
}
