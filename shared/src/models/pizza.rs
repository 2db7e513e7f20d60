//! Pizza Model

use super::Ingredient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog pizza entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    /// Base price, ingredients listed in `ingredients` included
    pub price: Decimal,
    pub description: String,
    pub photo: String,
    /// Base ingredients included in the listed price.
    /// The catalog endpoint may omit this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl Pizza {
    /// Whether `ingredient_id` is part of the base recipe
    pub fn has_base_ingredient(&self, ingredient_id: i64) -> bool {
        self.ingredients
            .as_deref()
            .is_some_and(|base| base.iter().any(|i| i.id == ingredient_id))
    }
}
