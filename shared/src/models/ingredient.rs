//! Ingredient Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog ingredient
///
/// Immutable catalog entry. Cart identity comparisons go by `id`,
/// never by name or price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    /// Price added on top of the pizza base price when selected as extra
    pub price: Decimal,
    pub photo: Option<String>,
}
