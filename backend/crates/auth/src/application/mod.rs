//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod delete_user;
pub mod get_user;
pub mod login;
pub mod register;
pub mod update_user;
pub mod verify_token;

// Re-exports
pub use config::AuthConfig;
pub use delete_user::DeleteUserUseCase;
pub use get_user::{GetUserQuery, GetUserUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
pub use verify_token::VerifyTokenUseCase;
