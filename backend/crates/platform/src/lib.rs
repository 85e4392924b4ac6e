//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id with zeroized clear text)
//! - Bearer credential extraction from request headers
//! - Signed access tokens (HS256 JWT)

pub mod bearer;
pub mod password;
pub mod token;
