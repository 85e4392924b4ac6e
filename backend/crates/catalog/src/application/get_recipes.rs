//! Recipe Queries

use kernel::id::RecipeId;
use std::sync::Arc;

use crate::domain::entity::Recipe;
use crate::domain::repository::RecipeRepository;
use crate::domain::value_object::search_pattern::SearchPattern;
use crate::error::{CatalogError, CatalogResult};

pub struct ListRecipesUseCase<R>
where
    R: RecipeRepository,
{
    repo: Arc<R>,
}

impl<R> ListRecipesUseCase<R>
where
    R: RecipeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<Recipe>> {
        self.repo.list_recipes().await
    }
}

pub struct GetRecipeUseCase<R>
where
    R: RecipeRepository,
{
    repo: Arc<R>,
}

impl<R> GetRecipeUseCase<R>
where
    R: RecipeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: RecipeId) -> CatalogResult<Recipe> {
        self.repo
            .find_recipe(id)
            .await?
            .ok_or(CatalogError::RecipeNotFound(id))
    }
}

pub struct SearchRecipesUseCase<R>
where
    R: RecipeRepository,
{
    repo: Arc<R>,
}

impl<R> SearchRecipesUseCase<R>
where
    R: RecipeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, title: Option<String>) -> CatalogResult<Vec<Recipe>> {
        let pattern = SearchPattern::new(title, "Title must be a non-empty string")?;
        self.repo.search_recipes(&pattern).await
    }
}
