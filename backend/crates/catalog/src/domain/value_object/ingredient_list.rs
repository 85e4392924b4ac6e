//! Ingredient List Value Object
//!
//! The validated ingredient set of a recipe. Never empty. Product
//! existence is checked by the use case, not here.

use kernel::error::app_error::{AppError, AppResult};
use kernel::id::ProductId;

use crate::domain::value_object::amount::Amount;

pub const INVALID_PRODUCT_ID: &str = "Each ingredient must have a valid productId (positive number)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientLine {
    pub product_id: ProductId,
    pub amount: Amount,
}

/// Positive and within the key range.
pub fn parse_product_id(raw: Option<i64>) -> AppResult<ProductId> {
    raw.filter(|id| *id > 0)
        .and_then(|id| i32::try_from(id).ok())
        .map(ProductId::from_i32)
        .ok_or_else(|| AppError::bad_request(INVALID_PRODUCT_ID))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientList(Vec<IngredientLine>);

impl IngredientList {
    pub fn new(lines: Vec<IngredientLine>) -> AppResult<Self> {
        if lines.is_empty() {
            return Err(AppError::bad_request("Ingredients must be a non-empty array"));
        }
        Ok(Self(lines))
    }

    pub fn lines(&self) -> &[IngredientLine] {
        &self.0
    }

    pub fn product_ids(&self) -> Vec<i32> {
        self.0.iter().map(|l| l.product_id.get()).collect()
    }

    pub fn amounts(&self) -> Vec<i32> {
        self.0.iter().map(|l| l.amount.get()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id(Some(3)).unwrap(), ProductId::from_i32(3));
        for raw in [None, Some(0), Some(-1), Some(i64::from(i32::MAX) + 1)] {
            assert_eq!(parse_product_id(raw).unwrap_err().message(), INVALID_PRODUCT_ID);
        }
    }

    #[test]
    fn test_list_must_not_be_empty() {
        assert!(IngredientList::new(Vec::new()).is_err());

        let list = IngredientList::new(vec![
            IngredientLine {
                product_id: ProductId::from_i32(1),
                amount: Amount::new(100).unwrap(),
            },
            IngredientLine {
                product_id: ProductId::from_i32(2),
                amount: Amount::new(5).unwrap(),
            },
        ])
        .unwrap();
        assert_eq!(list.product_ids(), vec![1, 2]);
        assert_eq!(list.amounts(), vec![100, 5]);
    }
}
