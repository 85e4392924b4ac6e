//! Application Layer
//!
//! One use case per catalog operation.

pub mod create_product;
pub mod create_recipe;
pub mod delete_product;
pub mod delete_recipe;
pub mod get_products;
pub mod get_recipes;
pub mod ingredients;
pub mod update_product;
pub mod update_recipe;

// Re-exports
pub use create_product::{CreateProductInput, CreateProductUseCase};
pub use create_recipe::{CreateRecipeInput, CreateRecipeUseCase};
pub use delete_product::DeleteProductUseCase;
pub use delete_recipe::DeleteRecipeUseCase;
pub use get_products::{GetProductUseCase, ListProductsUseCase, SearchProductsUseCase};
pub use get_recipes::{GetRecipeUseCase, ListRecipesUseCase, SearchRecipesUseCase};
pub use ingredients::IngredientInput;
pub use update_product::{UpdateProductInput, UpdateProductUseCase};
pub use update_recipe::{UpdateRecipeInput, UpdateRecipeUseCase};
