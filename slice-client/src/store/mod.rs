//! Reactive state stores
//!
//! Each store owns a `tokio::sync::watch` channel: mutations go through
//! `send_modify`, which applies the change and notifies subscribers in one
//! step. That gives the single-writer discipline the cart needs — two rapid
//! quantity updates serialize instead of racing — and observers never see a
//! half-applied merge.

pub mod addresses;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod session;

// Re-exports
pub use addresses::{AddressBook, AddressStore};
pub use cart::{Cart, CartLine, CartStore};
pub use catalog::{Catalog, CatalogStore};
pub use checkout::{assemble_order, CheckoutState, CheckoutStore};
pub use orders::{OrderHistory, OrderStore};
pub use session::{Session, SessionStore};
