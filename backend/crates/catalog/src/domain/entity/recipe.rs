//! Recipe Entity
//!
//! A recipe is loaded together with its owner and every ingredient's
//! product, so a single value is enough to render it.

use kernel::id::{IngredientId, RecipeId, UserId};

use crate::domain::entity::product::Product;
use crate::domain::value_object::{ingredient_list::IngredientList, required_text::RequiredText};

/// Public part of the owning user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: IngredientId,
    /// Grams
    pub amount: i32,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub owner: Owner,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn owner_id(&self) -> UserId {
        self.owner.id
    }
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: RequiredText,
    pub description: RequiredText,
    pub owner_id: UserId,
    pub ingredients: IngredientList,
}

/// Partial update. A present ingredient list replaces the old one wholesale.
#[derive(Debug, Clone, Default)]
pub struct RecipeChanges {
    pub title: Option<RequiredText>,
    pub description: Option<RequiredText>,
    pub ingredients: Option<IngredientList>,
}
