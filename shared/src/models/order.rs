//! Order Model
//!
//! The order record returned by the backend after submission and from the
//! order-history endpoint. Outbound creation DTOs live in [`crate::request`].

use super::{Address, Ingredient, Pizza, User};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment method selected at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card on delivery
    #[default]
    Card,
    /// Cash on delivery
    Cash,
}

/// Submitted order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user: User,
    pub address: Address,
    pub status: String,
    pub price: Decimal,
    pub created_at: String,
    pub delivery_time: String,
    pub pizzas: Vec<OrderPizza>,
    pub payment_method: PaymentMethod,
}

/// One pizza line of a submitted order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPizza {
    pub id: i64,
    pub pizza: Pizza,
    /// Price the backend charged for this line, extras included
    pub custom_price: Decimal,
    pub ingredients: Vec<OrderIngredient>,
}

/// One ingredient adjustment of a submitted order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderIngredient {
    pub ingredient_id: i64,
    pub is_added: bool,
    pub count: i32,
    pub ingredient: Ingredient,
}
