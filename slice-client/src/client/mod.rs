//! High-level client facade
//!
//! [`SliceClient`] owns the HTTP transport and every state store. The view
//! layer reads through store subscriptions and mutates through the methods
//! here; nothing else writes to the stores.

mod addresses;
mod auth;
mod catalog;
mod orders;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::store::{
    AddressStore, CartStore, CatalogStore, CheckoutStore, OrderStore, SessionStore,
};
use crate::ClientConfig;
use std::sync::Arc;

/// Client for the slice ordering backend
#[derive(Debug)]
pub struct SliceClient {
    http: HttpClient,
    /// Auth token + current user
    pub session: Arc<SessionStore>,
    /// Pizzas, ingredients, favorites
    pub catalog: CatalogStore,
    /// Delivery addresses + checkout selection
    pub addresses: AddressStore,
    /// Cart lines
    pub cart: CartStore,
    /// Delivery slot + payment method selection
    pub checkout: CheckoutStore,
    /// Order history + current order
    pub orders: OrderStore,
}

impl SliceClient {
    /// Create a client from configuration. A token in the configuration
    /// (restored by the host app) starts the session logged in.
    pub fn new(config: ClientConfig) -> Self {
        let session = Arc::new(SessionStore::new(config.token.clone()));
        let http = HttpClient::new(&config, session.clone());

        Self {
            http,
            session,
            catalog: CatalogStore::new(),
            addresses: AddressStore::new(),
            cart: CartStore::new(),
            checkout: CheckoutStore::new(),
            orders: OrderStore::new(),
        }
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Gate for endpoints that require authentication
    pub(crate) fn require_auth(&self) -> ClientResult<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(ClientError::Unauthorized)
        }
    }
}
