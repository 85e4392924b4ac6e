//! Catalog Backend Module
//!
//! Products and recipes owned by users.
//!
//! - `domain/` - Products, recipes, ingredients, repository traits
//! - `application/` - One use case per operation
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Reads are public. Writes go through `auth::require_auth` and the
//! owner-or-admin rule on the loaded resource.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use domain::repository::{OwnerDirectory, ProductRepository, RecipeRepository};
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::{catalog_router, catalog_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
