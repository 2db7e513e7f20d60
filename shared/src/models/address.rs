//! Address Model

use serde::{Deserialize, Serialize};

/// Delivery address
///
/// `id` is server-assigned; the client never fabricates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: String,
    pub user_id: i64,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.city, self.street, self.house)
    }
}
