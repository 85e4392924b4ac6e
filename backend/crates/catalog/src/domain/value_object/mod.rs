//! Value Object Module

pub mod amount;
pub mod calories;
pub mod ingredient_list;
pub mod required_text;
pub mod search_pattern;
