//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.
//!
//! `require_auth` verifies the bearer token and stores the caller's
//! [`Identity`] in request extensions. Handlers take `Identity` as an
//! extractor and do their own ownership checks.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::VerifyTokenUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::Identity;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
///
/// Other crates build this to guard their own routes with the same rule.
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(req.headers()).ok_or(AuthError::MissingToken)?;

    let use_case = VerifyTokenUseCase::new(state.repo.clone(), state.config.clone());
    let identity = use_case.execute(&token).await?;

    tracing::debug!(user_id = %identity.user_id, "Authenticated request");

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}
