//! Update Product Use Case
//!
//! Existence, then ownership, then field validation.

use auth::Identity;
use kernel::id::ProductId;
use std::sync::Arc;

use crate::domain::entity::{Product, ProductChanges};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{calories::Calories, required_text::RequiredText};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub calories: Option<f64>,
}

pub struct UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        caller: &Identity,
        id: ProductId,
        input: UpdateProductInput,
    ) -> CatalogResult<Product> {
        let product = self
            .repo
            .find_product(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))?;

        if !caller.can_modify(product.owner_id) {
            return Err(CatalogError::Forbidden(
                "Only the user who created the product or an admin can update it.",
            ));
        }

        let changes = ProductChanges {
            name: input
                .name
                .map(|n| RequiredText::new(n, "Name must be a non-empty string"))
                .transpose()?,
            calories: input.calories.map(Calories::new).transpose()?,
        };

        if changes.is_empty() {
            return Ok(product);
        }

        let updated = self
            .repo
            .update_product(id, &changes)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))?;

        tracing::info!(product_id = %id, user_id = %caller.user_id, "Product updated");

        Ok(updated)
    }
}
