//! Data models
//!
//! Shared between the client SDK and any server-side tooling (via API).
//! All server-assigned IDs are `i64`; prices are `rust_decimal::Decimal`
//! serialized as JSON floats.

pub mod address;
pub mod ingredient;
pub mod order;
pub mod pizza;
pub mod user;

// Re-exports
pub use address::*;
pub use ingredient::*;
pub use order::*;
pub use pizza::*;
pub use user::*;
