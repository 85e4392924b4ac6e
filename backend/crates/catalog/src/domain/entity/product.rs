//! Product Entity

use kernel::id::{ProductId, UserId};

use crate::domain::value_object::{calories::Calories, required_text::RequiredText};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub calories: f64,
    pub owner_id: UserId,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: RequiredText,
    pub calories: Calories,
    pub owner_id: UserId,
}

/// Partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<RequiredText>,
    pub calories: Option<Calories>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.calories.is_none()
    }
}
