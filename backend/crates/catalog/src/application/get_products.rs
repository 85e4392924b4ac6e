//! Product Queries
//!
//! Public reads: list, lookup by id, name search.

use kernel::id::ProductId;
use std::sync::Arc;

use crate::domain::entity::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::search_pattern::SearchPattern;
use crate::error::{CatalogError, CatalogResult};

pub struct ListProductsUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> ListProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<Product>> {
        self.repo.list_products().await
    }
}

pub struct GetProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> GetProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: ProductId) -> CatalogResult<Product> {
        self.repo
            .find_product(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }
}

pub struct SearchProductsUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> SearchProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, name: Option<String>) -> CatalogResult<Vec<Product>> {
        let pattern = SearchPattern::new(name, "Name must be a non-empty string")?;
        self.repo.search_products(&pattern).await
    }
}
