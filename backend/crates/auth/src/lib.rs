//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Users, identity, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and username/password login
//! - Stateless HS256 bearer tokens (30 days, no refresh)
//! - Self-service user update/delete with admin override
//! - `require_auth` middleware and [`Identity`] extractor for other crates
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never serialised
//! - Unknown users and wrong passwords are indistinguishable to the caller
//! - A token whose user has been deleted is rejected

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::{Identity, User};
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthMiddlewareState, require_auth};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
