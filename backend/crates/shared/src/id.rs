//! Common ID Types
//!
//! Type-safe wrappers over the store's `SERIAL` keys.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper
///
/// Serializes as a bare integer so wire payloads stay `{"id": 3}`.
///
/// ```
/// use kernel::id::{ProductId, RecipeId};
///
/// let product = ProductId::from_i32(3);
/// let recipe = RecipeId::from_i32(3);
/// assert_eq!(product.get(), recipe.get());
/// ```
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    #[inline]
    pub const fn from_i32(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn get(&self) -> i32 {
        self.value
    }
}

// Manual impls so markers need not implement the traits themselves.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::from_i32)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct User;
    pub struct Product;
    pub struct Recipe;
    /// A row of `recipe_ingredients`
    pub struct RecipeIngredient;
}

pub type UserId = Id<markers::User>;
pub type ProductId = Id<markers::Product>;
pub type RecipeId = Id<markers::Recipe>;
pub type IngredientId = Id<markers::RecipeIngredient>;
