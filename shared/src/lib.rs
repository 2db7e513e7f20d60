//! Shared types for the slice ordering platform
//!
//! Domain models, wire DTOs and pure helpers used by the client SDK.
//! No I/O lives here: everything is plain data plus derivations.

pub mod delivery;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use delivery::{DeliveryDay, DeliverySlot};
pub use models::{Address, Ingredient, Order, PaymentMethod, Pizza, User};
