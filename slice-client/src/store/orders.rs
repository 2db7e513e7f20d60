//! Order history holder
//!
//! Fetched past orders plus the order recorded by the latest successful
//! submission. The current order is the durable client-side record that a
//! checkout went through; it is set immediately after the cart is cleared.

use shared::Order;
use tokio::sync::watch;

/// Order state
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    pub orders: Vec<Order>,
    pub current: Option<Order>,
}

/// Single-writer order container
#[derive(Debug)]
pub struct OrderStore {
    state: watch::Sender<OrderHistory>,
}

impl OrderStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(OrderHistory::default());
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<OrderHistory> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> OrderHistory {
        self.state.borrow().clone()
    }

    pub fn current(&self) -> Option<Order> {
        self.state.borrow().current.clone()
    }

    pub(crate) fn replace(&self, orders: Vec<Order>) {
        self.state.send_modify(|history| history.orders = orders);
    }

    pub(crate) fn set_current(&self, order: Order) {
        self.state.send_modify(|history| history.current = Some(order));
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
