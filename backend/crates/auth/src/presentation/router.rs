//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// Serves `/api/auth/login` and the `/users` resource.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let guard = AuthMiddlewareState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    let protected = Router::new()
        .route(
            "/users/{id}",
            put(handlers::update_user::<R>).delete(handlers::delete_user::<R>),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_auth::<R>));

    Router::new()
        .route("/api/auth/login", post(handlers::login::<R>))
        .route("/users", get(handlers::get_user::<R>))
        .route("/users/register", post(handlers::register::<R>))
        .merge(protected)
        .with_state(state)
}
