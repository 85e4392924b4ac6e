//! Catalog Router

use auth::{AuthMiddlewareState, PgUserRepository, UserRepository, require_auth};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState, CatalogStore};

/// Create the catalog router with PostgreSQL repositories
pub fn catalog_router(
    repo: PgCatalogRepository,
    guard: AuthMiddlewareState<PgUserRepository>,
) -> Router {
    catalog_router_generic(repo, guard)
}

/// Create a generic catalog router
///
/// `guard` is the same middleware state the auth router uses, so tokens
/// are verified against one user store.
pub fn catalog_router_generic<C, U>(repo: C, guard: AuthMiddlewareState<U>) -> Router
where
    C: CatalogStore,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    let protected = Router::new()
        .route("/products", post(handlers::create_product::<C>))
        .route(
            "/products/{id}",
            put(handlers::update_product::<C>).delete(handlers::delete_product::<C>),
        )
        .route("/recipes", post(handlers::create_recipe::<C>))
        .route(
            "/recipes/{id}",
            put(handlers::update_recipe::<C>).delete(handlers::delete_recipe::<C>),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_auth::<U>));

    Router::new()
        .route("/products", get(handlers::list_products::<C>))
        .route("/products/search", get(handlers::search_products::<C>))
        .route("/products/{id}", get(handlers::get_product::<C>))
        .route("/recipes", get(handlers::list_recipes::<C>))
        .route("/recipes/search", get(handlers::search_recipes::<C>))
        .route("/recipes/{id}", get(handlers::get_recipe::<C>))
        .merge(protected)
        .with_state(state)
}
