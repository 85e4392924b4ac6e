//! Entity Module

pub mod identity;
pub mod user;

pub use identity::Identity;
pub use user::{NewUser, User, UserChanges};
