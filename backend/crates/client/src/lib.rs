//! Typed client for the recipe catalog API
//!
//! The bearer token lives in an explicit [`Session`] value that the caller
//! owns and passes to every protected call. A 401 or 403 answer on a
//! protected call ends the session.

pub mod api;
pub mod error;
pub mod models;
pub mod session;

pub use api::ApiClient;
pub use error::{ClientError, ClientResult};
pub use session::Session;

#[cfg(test)]
mod tests;
