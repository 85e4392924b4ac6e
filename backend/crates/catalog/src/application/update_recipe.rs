//! Update Recipe Use Case
//!
//! Existence, then ownership, then field validation. A supplied ingredient
//! list replaces the stored one completely.

use auth::Identity;
use kernel::id::RecipeId;
use std::sync::Arc;

use crate::application::ingredients::{IngredientInput, resolve_ingredients};
use crate::domain::entity::{Recipe, RecipeChanges};
use crate::domain::repository::{ProductRepository, RecipeRepository};
use crate::domain::value_object::required_text::RequiredText;
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<IngredientInput>>,
}

pub struct UpdateRecipeUseCase<R>
where
    R: RecipeRepository + ProductRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateRecipeUseCase<R>
where
    R: RecipeRepository + ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        caller: &Identity,
        id: RecipeId,
        input: UpdateRecipeInput,
    ) -> CatalogResult<Recipe> {
        let recipe = self
            .repo
            .find_recipe(id)
            .await?
            .ok_or(CatalogError::RecipeNotFound(id))?;

        if !caller.can_modify(recipe.owner_id()) {
            return Err(CatalogError::Forbidden(
                "Only the user who created the recipe or an admin can update it.",
            ));
        }

        let title = input
            .title
            .map(|t| RequiredText::new(t, "Title must be a non-empty string"))
            .transpose()?;
        let description = input
            .description
            .map(|d| RequiredText::new(d, "Description must be a non-empty string"))
            .transpose()?;
        let ingredients = match input.ingredients {
            Some(ingredients) => Some(resolve_ingredients(self.repo.as_ref(), ingredients).await?),
            None => None,
        };

        let changes = RecipeChanges {
            title,
            description,
            ingredients,
        };

        let updated = self
            .repo
            .update_recipe(id, &changes)
            .await?
            .ok_or(CatalogError::RecipeNotFound(id))?;

        tracing::info!(
            recipe_id = %id,
            user_id = %caller.user_id,
            ingredients_replaced = changes.ingredients.is_some(),
            "Recipe updated"
        );

        Ok(updated)
    }
}
