//! Outbound request DTOs
//!
//! Wire shapes for everything the client sends. Field names follow the
//! backend's snake_case contract; sparse payloads serialize only the fields
//! that are actually set.

use crate::models::PaymentMethod;
use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request (`POST /auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request (`POST /auth/register`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Password re-verification (`POST /auth/verify-password`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPasswordRequest {
    pub password: String,
}

// =============================================================================
// Profile API DTOs
// =============================================================================

/// Sparse profile update (`PATCH /users/me`)
///
/// Every field is optional and absent fields stay off the wire, so the
/// backend only sees what actually changed. An update with no fields set is
/// rejected client-side before any request is made.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    pub fn password_change(
        mut self,
        current: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        self.current_password = Some(current.into());
        self.new_password = Some(new.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.phone_number.is_none()
            && self.current_password.is_none()
            && self.new_password.is_none()
    }
}

// =============================================================================
// Address API DTOs
// =============================================================================

/// New address payload (`POST /users/address/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressCreate {
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: String,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Order creation payload (`POST /orders/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub address_id: i64,
    pub pizzas: Vec<OrderPizzaRequest>,
    /// Slot start, `"HH:MM"`
    pub delivery_time: String,
    pub payment_method: PaymentMethod,
}

/// One pizza line of an order creation payload
///
/// Line quantity is not part of the wire shape; the backend receives one
/// entry per distinct cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPizzaRequest {
    pub pizza_id: i64,
    pub ingredients: Vec<OrderIngredientRequest>,
}

/// One ingredient adjustment of an order creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderIngredientRequest {
    pub ingredient_id: i64,
    pub is_added: bool,
    pub count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_update_serializes_only_set_fields() {
        let update = ProfileUpdate::new().username("mario");
        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json, serde_json::json!({ "username": "mario" }));
    }

    #[test]
    fn profile_update_empty_detection() {
        assert!(ProfileUpdate::new().is_empty());
        assert!(!ProfileUpdate::new().phone_number("+79990000000").is_empty());
    }

    #[test]
    fn payment_method_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Card).unwrap(),
            "\"card\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            "\"cash\""
        );
    }
}
