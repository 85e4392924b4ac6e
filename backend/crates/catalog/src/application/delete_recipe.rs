//! Delete Recipe Use Case

use auth::Identity;
use kernel::id::RecipeId;
use std::sync::Arc;

use crate::domain::repository::RecipeRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct DeleteRecipeUseCase<R>
where
    R: RecipeRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteRecipeUseCase<R>
where
    R: RecipeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: &Identity, id: RecipeId) -> CatalogResult<()> {
        let recipe = self
            .repo
            .find_recipe(id)
            .await?
            .ok_or(CatalogError::RecipeNotFound(id))?;

        if !caller.can_modify(recipe.owner_id()) {
            return Err(CatalogError::Forbidden(
                "Only the user who created the recipe or an admin can delete it.",
            ));
        }

        if !self.repo.delete_recipe(id).await? {
            return Err(CatalogError::RecipeNotFound(id));
        }

        tracing::info!(recipe_id = %id, user_id = %caller.user_id, "Recipe deleted");

        Ok(())
    }
}
