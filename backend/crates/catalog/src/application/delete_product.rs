//! Delete Product Use Case

use auth::Identity;
use kernel::id::ProductId;
use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Recipes keep existing; they lose the ingredient rows for this product.
    pub async fn execute(&self, caller: &Identity, id: ProductId) -> CatalogResult<()> {
        let product = self
            .repo
            .find_product(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))?;

        if !caller.can_modify(product.owner_id) {
            return Err(CatalogError::Forbidden(
                "Only the user who created the product or an admin can delete it.",
            ));
        }

        if !self.repo.delete_product(id).await? {
            return Err(CatalogError::ProductNotFound(id));
        }

        tracing::info!(product_id = %id, user_id = %caller.user_id, "Product deleted");

        Ok(())
    }
}
