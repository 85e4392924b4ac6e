//! API Client

use std::time::Duration;

use kernel::id::{ProductId, RecipeId, UserId};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::models::{
    Credentials, LoginResponse, Message, Problem, Product, ProductDraft, Recipe, RecipeDraft,
    Registration, UpdatedUser, User, UserUpdate,
};
use crate::session::Session;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_http(base_url, http))
    }

    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        decode(response).await
    }

    /// Attach the session token. A 401/403 answer logs the session out.
    async fn send_authed<T: DeserializeOwned>(
        &self,
        session: &mut Session,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let token = session.token().ok_or(ClientError::NotAuthenticated)?;
        let result = self.send(request.bearer_auth(token)).await;

        if let Err(err) = &result {
            if err.ends_session() {
                tracing::debug!(status = ?err.status(), "Session ended by server");
                session.logout();
            }
        }

        result
    }

    // ========================================================================
    // Auth & users
    // ========================================================================

    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Session> {
        let response: LoginResponse = self
            .send(
                self.request(Method::POST, "/api/auth/login")
                    .json(&Credentials { username, password }),
            )
            .await?;

        Ok(Session::Authenticated {
            token: response.access_token,
            user_id: response.user_id,
            username: response.user_name,
        })
    }

    pub async fn register(&self, registration: &Registration) -> ClientResult<User> {
        self.send(self.request(Method::POST, "/users/register").json(registration))
            .await
    }

    pub async fn get_user_by_id(&self, id: UserId) -> ClientResult<User> {
        self.send(
            self.request(Method::GET, "/users")
                .query(&[("id", id.get().to_string())]),
        )
        .await
    }

    pub async fn get_user_by_username(&self, username: &str) -> ClientResult<User> {
        self.send(self.request(Method::GET, "/users").query(&[("username", username)]))
            .await
    }

    pub async fn update_user(
        &self,
        session: &mut Session,
        id: UserId,
        update: &UserUpdate,
    ) -> ClientResult<UpdatedUser> {
        let request = self.request(Method::PUT, &format!("/users/{id}")).json(update);
        let updated: UpdatedUser = self.send_authed(session, request).await?;

        // Keep the cached name in step with a self-rename.
        if let Session::Authenticated {
            user_id, username, ..
        } = session
        {
            if *user_id == id {
                *username = updated.user.username.clone();
            }
        }

        Ok(updated)
    }

    /// Deleting one's own account also ends the session.
    pub async fn delete_user(&self, session: &mut Session, id: UserId) -> ClientResult<Message> {
        let request = self.request(Method::DELETE, &format!("/users/{id}"));
        let message = self.send_authed(session, request).await?;
        if session.user_id() == Some(id) {
            session.logout();
        }
        Ok(message)
    }

    // ========================================================================
    // Products
    // ========================================================================

    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.send(self.request(Method::GET, "/products")).await
    }

    pub async fn search_products(&self, name: &str) -> ClientResult<Vec<Product>> {
        self.send(self.request(Method::GET, "/products/search").query(&[("name", name)]))
            .await
    }

    pub async fn get_product(&self, id: ProductId) -> ClientResult<Product> {
        self.send(self.request(Method::GET, &format!("/products/{id}")))
            .await
    }

    pub async fn create_product(
        &self,
        session: &mut Session,
        draft: &ProductDraft,
    ) -> ClientResult<Product> {
        let request = self.request(Method::POST, "/products").json(draft);
        self.send_authed(session, request).await
    }

    pub async fn update_product(
        &self,
        session: &mut Session,
        id: ProductId,
        draft: &ProductDraft,
    ) -> ClientResult<Product> {
        let request = self.request(Method::PUT, &format!("/products/{id}")).json(draft);
        self.send_authed(session, request).await
    }

    pub async fn delete_product(&self, session: &mut Session, id: ProductId) -> ClientResult<Message> {
        let request = self.request(Method::DELETE, &format!("/products/{id}"));
        self.send_authed(session, request).await
    }

    // ========================================================================
    // Recipes
    // ========================================================================

    pub async fn list_recipes(&self) -> ClientResult<Vec<Recipe>> {
        self.send(self.request(Method::GET, "/recipes")).await
    }

    pub async fn search_recipes(&self, title: &str) -> ClientResult<Vec<Recipe>> {
        self.send(self.request(Method::GET, "/recipes/search").query(&[("title", title)]))
            .await
    }

    pub async fn get_recipe(&self, id: RecipeId) -> ClientResult<Recipe> {
        self.send(self.request(Method::GET, &format!("/recipes/{id}")))
            .await
    }

    pub async fn create_recipe(
        &self,
        session: &mut Session,
        draft: &RecipeDraft,
    ) -> ClientResult<Recipe> {
        let request = self.request(Method::POST, "/recipes").json(draft);
        self.send_authed(session, request).await
    }

    pub async fn update_recipe(
        &self,
        session: &mut Session,
        id: RecipeId,
        draft: &RecipeDraft,
    ) -> ClientResult<Recipe> {
        let request = self.request(Method::PUT, &format!("/recipes/{id}")).json(draft);
        self.send_authed(session, request).await
    }

    pub async fn delete_recipe(&self, session: &mut Session, id: RecipeId) -> ClientResult<Message> {
        let request = self.request(Method::DELETE, &format!("/recipes/{id}"));
        self.send_authed(session, request).await
    }
}

/// Success bodies decode into `T`; anything else becomes `ClientError::Api`
/// carrying the problem `detail`.
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let problem = response.json::<Problem>().await.unwrap_or_default();
    let message = problem.detail.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    });

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
