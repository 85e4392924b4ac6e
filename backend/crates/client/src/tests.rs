//! Unit tests for the API client

#[cfg(test)]
mod model_tests {
    use kernel::id::ProductId;
    use serde_json::json;

    use crate::models::*;

    #[test]
    fn test_drafts_omit_unset_fields() {
        let draft = ProductDraft {
            calories: Some(60.0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&draft).unwrap(), json!({ "calories": 60.0 }));

        let draft = RecipeDraft {
            ingredients: Some(vec![IngredientDraft {
                product_id: ProductId::from_i32(3),
                amount: 100,
            }]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({ "ingredients": [{ "productId": 3, "amount": 100 }] })
        );
    }

    #[test]
    fn test_recipe_decodes_server_shape() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 5,
            "title": "Pie",
            "description": "d",
            "user": { "id": 1, "username": "alice" },
            "ingredients": [{
                "id": 9,
                "amount": 100,
                "product": { "id": 2, "name": "Apple", "calories": 52.0, "userId": 1 }
            }]
        }))
        .unwrap();

        assert_eq!(recipe.user.username, "alice");
        assert_eq!(recipe.ingredients[0].product.name, "Apple");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::ClientError;

    #[test]
    fn test_ends_session() {
        let api = |status| ClientError::Api {
            status,
            message: String::new(),
        };
        assert!(api(401).ends_session());
        assert!(api(403).ends_session());
        assert!(!api(400).ends_session());
        assert!(!api(404).ends_session());
        assert!(!ClientError::NotAuthenticated.ends_session());
    }
}

#[cfg(test)]
mod api_tests {
    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode, header};
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use kernel::id::{ProductId, RecipeId, UserId};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    use crate::api::ApiClient;
    use crate::error::ClientError;
    use crate::models::ProductDraft;
    use crate::session::Session;

    const TOKEN: &str = "stub-token";

    fn problem(status: StatusCode, detail: &str) -> (StatusCode, Json<Value>) {
        (
            status,
            Json(json!({
                "type": "about:blank",
                "title": status.canonical_reason(),
                "status": status.as_u16(),
                "detail": detail,
            })),
        )
    }

    fn authorized(headers: &HeaderMap) -> bool {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == format!("Bearer {TOKEN}"))
    }

    async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if body["password"] == "secret1" {
            (
                StatusCode::OK,
                Json(json!({
                    "access_token": TOKEN,
                    "userName": body["username"],
                    "userRole": "user",
                    "userId": 1
                })),
            )
        } else {
            problem(StatusCode::UNAUTHORIZED, "Invalid username or password")
        }
    }

    async fn create_product(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if !authorized(&headers) {
            return problem(StatusCode::UNAUTHORIZED, "Missing bearer token");
        }
        (
            StatusCode::CREATED,
            Json(json!({ "id": 7, "name": body["name"], "calories": body["calories"], "userId": 1 })),
        )
    }

    async fn search(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
        let name = query.get("name").cloned().unwrap_or_default();
        Json(json!([{ "id": 1, "name": format!("Green {name}"), "calories": 52.0, "userId": 1 }]))
    }

    async fn forbidden() -> (StatusCode, Json<Value>) {
        problem(
            StatusCode::FORBIDDEN,
            "Only the user who created the recipe or an admin can delete it.",
        )
    }

    async fn delete_user() -> Json<Value> {
        Json(json!({ "message": "User deleted successfully" }))
    }

    async fn spawn_stub() -> ApiClient {
        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/products", post(create_product))
            .route("/products/search", get(search))
            .route("/recipes/{id}", delete(forbidden))
            .route("/users/{id}", delete(delete_user));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        ApiClient::new(format!("http://{addr}/")).unwrap()
    }

    #[tokio::test]
    async fn test_base_url_is_normalised() {
        let client = ApiClient::new("http://localhost:5000///").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/products"), "http://localhost:5000/products");
    }

    #[tokio::test]
    async fn test_login_and_authenticated_call() {
        let client = spawn_stub().await;

        let mut session = client.login("alice", "secret1").await.unwrap();
        assert_eq!(session.username(), Some("alice"));
        assert_eq!(session.user_id(), Some(UserId::from_i32(1)));

        let product = client
            .create_product(
                &mut session,
                &ProductDraft {
                    name: Some("Apple".into()),
                    calories: Some(52.0),
                },
            )
            .await
            .unwrap();
        assert_eq!(product.id, ProductId::from_i32(7));
        assert_eq!(product.name, "Apple");
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_carries_problem_detail() {
        let client = spawn_stub().await;

        let err = client.login("alice", "wrong").await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid username or password");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_anonymous_session_is_rejected_locally() {
        let client = spawn_stub().await;
        let mut session = Session::Anonymous;

        let err = client
            .create_product(&mut session, &ProductDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_forbidden_ends_session() {
        let client = spawn_stub().await;
        let mut session = client.login("alice", "secret1").await.unwrap();

        let err = client
            .delete_recipe(&mut session, RecipeId::from_i32(3))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert_eq!(session, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_deleting_own_account_logs_out() {
        let client = spawn_stub().await;
        let mut session = client.login("alice", "secret1").await.unwrap();

        let message = client
            .delete_user(&mut session, UserId::from_i32(1))
            .await
            .unwrap();

        assert_eq!(message.message, "User deleted successfully");
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_search_sends_query() {
        let client = spawn_stub().await;

        let products = client.search_products("Apple").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Green Apple");
    }
}
