//! Wire models
//!
//! Mirrors of the server's JSON bodies. Optional request fields are left
//! out of the payload when `None`, which the server reads as "unchanged".

use kernel::id::{IngredientId, ProductId, RecipeId, UserId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(rename = "access_token")]
    pub access_token: String,
    pub user_name: String,
    pub user_role: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedUser {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    pub message: String,
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub calories: f64,
    pub user_id: UserId,
}

// ============================================================================
// Recipes
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDraft {
    pub product_id: ProductId,
    /// Grams
    pub amount: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// On update, replaces every existing ingredient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientDraft>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeOwner {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub amount: i32,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub user: RecipeOwner,
    pub ingredients: Vec<Ingredient>,
}

/// RFC 7807 error body
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Problem {
    pub detail: Option<String>,
}
