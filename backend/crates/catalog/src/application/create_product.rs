//! Create Product Use Case

use auth::Identity;
use std::sync::Arc;

use crate::domain::entity::{NewProduct, Product};
use crate::domain::repository::{OwnerDirectory, ProductRepository};
use crate::domain::value_object::{calories::Calories, required_text::RequiredText};
use crate::error::{CatalogError, CatalogResult};

pub struct CreateProductInput {
    pub name: Option<String>,
    pub calories: Option<f64>,
}

pub struct CreateProductUseCase<R>
where
    R: ProductRepository + OwnerDirectory,
{
    repo: Arc<R>,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository + OwnerDirectory,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The caller becomes the owner.
    pub async fn execute(&self, caller: &Identity, input: CreateProductInput) -> CatalogResult<Product> {
        let name = RequiredText::new(input.name.unwrap_or_default(), "Product name is required")?;
        let calories = input
            .calories
            .ok_or_else(|| CatalogError::Validation("Product calories is required".into()))?;
        let calories = Calories::new(calories)?;

        if self.repo.find_owner(caller.user_id).await?.is_none() {
            return Err(CatalogError::OwnerNotFound);
        }

        let product = self
            .repo
            .create_product(&NewProduct {
                name,
                calories,
                owner_id: caller.user_id,
            })
            .await?;

        tracing::info!(product_id = %product.id, user_id = %caller.user_id, "Product created");

        Ok(product)
    }
}
