//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{Json, Path, Query};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    DeleteUserUseCase, GetUserQuery, GetUserUseCase, LoginInput, LoginUseCase, RegisterInput,
    RegisterUseCase, UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::entity::Identity;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UpdateUserRequest,
    UpdateUserResponse, UserQuery, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        access_token: output.access_token,
        user_name: output.user_name,
        user_role: output.user_role.code().to_string(),
        user_id: output.user_id,
    }))
}

// ============================================================================
// Users
// ============================================================================

/// GET /users?id=&username=
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<UserQuery>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetUserUseCase::new(state.repo.clone());

    let user = use_case
        .execute(GetUserQuery {
            id: query.user_id(),
            username: query.username,
        })
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /users/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PUT /users/{id}
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    caller: Identity,
    Path(id): Path<i32>,
    Json(req): Json<UpdateUserRequest>,
) -> AuthResult<Json<UpdateUserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateUserUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(
            &caller,
            UserId::from_i32(id),
            UpdateUserInput {
                username: req.username,
                email: req.email,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(UpdateUserResponse {
        message: "User information updated successfully".to_string(),
        user: UserResponse::from(&user),
    }))
}

/// DELETE /users/{id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    caller: Identity,
    Path(id): Path<i32>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteUserUseCase::new(state.repo.clone());

    use_case.execute(&caller, UserId::from_i32(id)).await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
