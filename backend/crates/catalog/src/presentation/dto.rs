//! API DTOs (Data Transfer Objects)
//!
//! Numeric request fields are loose `Option`s so the use cases can answer
//! with field-level messages. Responses whitelist what may leave the API.

use kernel::id::{IngredientId, ProductId, RecipeId, UserId};
use serde::{Deserialize, Serialize};

use crate::application::IngredientInput;
use crate::domain::entity::{Ingredient, Owner, Product, Recipe};

pub use auth::models::MessageResponse;

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub calories: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductSearchQuery {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub calories: f64,
    pub user_id: UserId,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            calories: product.calories,
            user_id: product.owner_id,
        }
    }
}

// ============================================================================
// Recipes
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRequest {
    pub product_id: Option<i64>,
    pub amount: Option<f64>,
}

impl From<IngredientRequest> for IngredientInput {
    fn from(req: IngredientRequest) -> Self {
        Self {
            product_id: req.product_id,
            amount: req.amount,
        }
    }
}

/// Body of both `POST /recipes` and `PUT /recipes/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<IngredientRequest>>,
}

impl RecipeRequest {
    pub fn ingredient_inputs(&mut self) -> Option<Vec<IngredientInput>> {
        self.ingredients
            .take()
            .map(|list| list.into_iter().map(IngredientInput::from).collect())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeSearchQuery {
    pub title: Option<String>,
}

/// Owner as shown inside a recipe. No email, no admin flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub id: UserId,
    pub username: String,
}

impl From<&Owner> for OwnerResponse {
    fn from(owner: &Owner) -> Self {
        Self {
            id: owner.id,
            username: owner.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientResponse {
    pub id: IngredientId,
    pub amount: i32,
    pub product: ProductResponse,
}

impl From<&Ingredient> for IngredientResponse {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id,
            amount: ingredient.amount,
            product: ProductResponse::from(&ingredient.product),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub user: OwnerResponse,
    pub ingredients: Vec<IngredientResponse>,
}

impl From<&Recipe> for RecipeResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            user: OwnerResponse::from(&recipe.owner),
            ingredients: recipe.ingredients.iter().map(IngredientResponse::from).collect(),
        }
    }
}
