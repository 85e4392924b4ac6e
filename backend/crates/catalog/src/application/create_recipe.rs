//! Create Recipe Use Case
//!
//! Everything is validated before the store is touched, so a rejected
//! request leaves no recipe behind.

use auth::Identity;
use std::sync::Arc;

use crate::application::ingredients::{IngredientInput, resolve_ingredients};
use crate::domain::entity::{NewRecipe, Recipe};
use crate::domain::repository::{OwnerDirectory, ProductRepository, RecipeRepository};
use crate::domain::value_object::required_text::RequiredText;
use crate::error::{CatalogError, CatalogResult};

pub struct CreateRecipeInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<IngredientInput>>,
}

pub struct CreateRecipeUseCase<R>
where
    R: RecipeRepository + ProductRepository + OwnerDirectory,
{
    repo: Arc<R>,
}

impl<R> CreateRecipeUseCase<R>
where
    R: RecipeRepository + ProductRepository + OwnerDirectory,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: &Identity, input: CreateRecipeInput) -> CatalogResult<Recipe> {
        let title = RequiredText::new(
            input.title.unwrap_or_default(),
            "Title is required and must be a non-empty string",
        )?;
        let description = RequiredText::new(
            input.description.unwrap_or_default(),
            "Description is required and must be a non-empty string",
        )?;

        let ingredients = match input.ingredients {
            Some(ingredients) if !ingredients.is_empty() => ingredients,
            _ => {
                return Err(CatalogError::Validation(
                    "Ingredients is required and must be a non-empty array".into(),
                ));
            }
        };
        let ingredients = resolve_ingredients(self.repo.as_ref(), ingredients).await?;

        if self.repo.find_owner(caller.user_id).await?.is_none() {
            return Err(CatalogError::OwnerNotFound);
        }

        let recipe = self
            .repo
            .create_recipe(&NewRecipe {
                title,
                description,
                owner_id: caller.user_id,
                ingredients,
            })
            .await?;

        tracing::info!(
            recipe_id = %recipe.id,
            user_id = %caller.user_id,
            ingredients = recipe.ingredients.len(),
            "Recipe created"
        );

        Ok(recipe)
    }
}
