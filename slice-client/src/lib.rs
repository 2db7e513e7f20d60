//! Slice Client - HTTP client SDK for the slice ordering backend
//!
//! Typed API calls plus reactive state stores for catalog, cart, session,
//! addresses and checkout. View layers subscribe to the stores and issue
//! mutations through [`SliceClient`].

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod validation;

pub use client::SliceClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ValidationError};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{
    Address, DeliveryDay, DeliverySlot, Ingredient, Order, PaymentMethod, Pizza, User,
};
