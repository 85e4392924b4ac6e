//! Entity Module

pub mod product;
pub mod recipe;

pub use product::{NewProduct, Product, ProductChanges};
pub use recipe::{Ingredient, NewRecipe, Owner, Recipe, RecipeChanges};
