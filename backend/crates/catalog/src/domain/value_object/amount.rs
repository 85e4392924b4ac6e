//! Ingredient Amount Value Object
//!
//! Grams of a product in a recipe. Whole and strictly positive.

use kernel::error::app_error::{AppError, AppResult};

pub const INVALID_AMOUNT: &str = "Each ingredient must have a valid amount (greater than 0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(i32);

impl Amount {
    pub fn new(value: i32) -> AppResult<Self> {
        if value <= 0 {
            return Err(AppError::bad_request(INVALID_AMOUNT));
        }
        Ok(Self(value))
    }

    /// JSON numbers arrive as `f64`; `100.0` is accepted, `100.5` is not.
    pub fn from_number(value: f64) -> AppResult<Self> {
        if !value.is_finite() || value.fract() != 0.0 || value > i32::MAX as f64 {
            return Err(AppError::bad_request(INVALID_AMOUNT));
        }
        Self::new(value as i32)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_whole_numbers() {
        assert_eq!(Amount::new(100).unwrap().get(), 100);
        assert_eq!(Amount::from_number(250.0).unwrap().get(), 250);
    }

    #[test]
    fn test_rejects_zero_negative_and_fractions() {
        for value in [0.0, -5.0, 1.5, f64::NAN, 1e12] {
            let err = Amount::from_number(value).unwrap_err();
            assert_eq!(err.message(), INVALID_AMOUNT);
        }
        assert!(Amount::new(0).is_err());
    }
}
