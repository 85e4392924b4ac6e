//! Calories Value Object

use kernel::error::app_error::{AppError, AppResult};

/// Column default when a product row is inserted without calories
pub const DEFAULT_CALORIES: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calories(f64);

impl Calories {
    pub fn new(value: f64) -> AppResult<Self> {
        if !value.is_finite() {
            return Err(AppError::bad_request("Calories must be a valid number"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Calories {
    fn default() -> Self {
        Self(DEFAULT_CALORIES)
    }
}
