//! Ingredient resolution shared by recipe create and update.

use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{
    amount::Amount,
    ingredient_list::{IngredientLine, IngredientList, parse_product_id},
};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Default)]
pub struct IngredientInput {
    pub product_id: Option<i64>,
    /// Grams
    pub amount: Option<f64>,
}

/// Validate each entry in order: product id, amount, then that the product
/// exists. The first failure wins.
pub(crate) async fn resolve_ingredients<P>(
    products: &P,
    inputs: Vec<IngredientInput>,
) -> CatalogResult<IngredientList>
where
    P: ProductRepository,
{
    let mut lines = Vec::with_capacity(inputs.len());

    for input in inputs {
        let product_id = parse_product_id(input.product_id)?;
        // Missing counts as zero.
        let amount = Amount::from_number(input.amount.unwrap_or_default())?;

        if products.find_product(product_id).await?.is_none() {
            return Err(CatalogError::ProductNotFound(product_id));
        }

        lines.push(IngredientLine { product_id, amount });
    }

    Ok(IngredientList::new(lines)?)
}
