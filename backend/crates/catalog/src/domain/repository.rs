//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Method names are distinct across traits so one store can implement all.

use kernel::id::{ProductId, RecipeId, UserId};

use crate::domain::entity::{
    NewProduct, NewRecipe, Owner, Product, ProductChanges, Recipe, RecipeChanges,
};
use crate::domain::value_object::search_pattern::SearchPattern;
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    async fn find_product(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    async fn search_products(&self, pattern: &SearchPattern) -> CatalogResult<Vec<Product>>;

    async fn create_product(&self, product: &NewProduct) -> CatalogResult<Product>;

    /// `None` when the product does not exist.
    async fn update_product(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> CatalogResult<Option<Product>>;

    /// Ingredient rows using the product go with it.
    async fn delete_product(&self, id: ProductId) -> CatalogResult<bool>;
}

/// Recipe repository trait
///
/// Every returned recipe carries its owner and resolved ingredients.
#[trait_variant::make(RecipeRepository: Send)]
pub trait LocalRecipeRepository {
    async fn list_recipes(&self) -> CatalogResult<Vec<Recipe>>;

    async fn find_recipe(&self, id: RecipeId) -> CatalogResult<Option<Recipe>>;

    async fn search_recipes(&self, pattern: &SearchPattern) -> CatalogResult<Vec<Recipe>>;

    /// Recipe row and ingredient rows are written atomically.
    async fn create_recipe(&self, recipe: &NewRecipe) -> CatalogResult<Recipe>;

    /// Atomic. A new ingredient list deletes every old row before inserting.
    async fn update_recipe(
        &self,
        id: RecipeId,
        changes: &RecipeChanges,
    ) -> CatalogResult<Option<Recipe>>;

    async fn delete_recipe(&self, id: RecipeId) -> CatalogResult<bool>;
}

/// Lookup of users who may own catalog entries
#[trait_variant::make(OwnerDirectory: Send)]
pub trait LocalOwnerDirectory {
    async fn find_owner(&self, id: UserId) -> CatalogResult<Option<Owner>>;
}
