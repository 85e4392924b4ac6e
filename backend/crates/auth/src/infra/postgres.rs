//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User, UserChanges};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword, user_role::UserRole,
};
use crate::error::AuthResult;

const USER_COLUMNS: &str = "id, username, email, password, is_admin, created_at, updated_at";

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_by(&self, column: &str, value: &str) -> AuthResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .fetch_one(&self.pool)
        .await?;

        row.into_user()
    }

    async fn find_by_id(&self, id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        self.fetch_one_by("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        self.fetch_one_by("email", email).await
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                password = COALESCE($4, password),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id.get())
        .bind(changes.username.as_ref().map(|u| u.as_str()))
        .bind(changes.email.as_ref().map(|e| e.as_str()))
        .bind(changes.password.as_ref().map(|p| p.as_phc_string()))
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn delete(&self, id: UserId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    username: String,
    email: String,
    password: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            id: UserId::from_i32(self.id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password: UserPassword::from_phc_string(self.password)?,
            role: UserRole::from_is_admin(self.is_admin),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
