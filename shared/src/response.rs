//! Inbound response DTOs
//!
//! Wire shapes the backend returns outside of the plain entity lists in
//! [`crate::models`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Login response (`POST /auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Available delivery windows (`GET /orders/delivery-times/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryTimesResponse {
    pub delivery_times: Vec<String>,
}

/// Password verification result (`POST /auth/verify-password`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordVerification {
    pub is_valid: bool,
}

/// Error body with a single human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Error body carrying per-field validation messages (422)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: HashMap<String, Vec<String>>,
}
