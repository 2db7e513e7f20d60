//! Delivery times and order API

use super::SliceClient;
use crate::error::{ClientResult, ValidationError};
use crate::store::checkout::assemble_order;
use shared::delivery::generate_slots;
use shared::response::DeliveryTimesResponse;
use shared::{DeliveryDay, DeliverySlot, Order};

impl SliceClient {
    /// Fetch the backend's same-day delivery windows
    pub async fn fetch_delivery_times(&self) -> ClientResult<Vec<DeliverySlot>> {
        self.require_auth()?;
        let response: DeliveryTimesResponse = self.http().get("/orders/delivery-times/").await?;
        Ok(response
            .delivery_times
            .into_iter()
            .map(DeliverySlot::from_remote)
            .collect())
    }

    /// Selectable delivery slots for `day`
    ///
    /// For today the backend list is authoritative; when it is unreachable
    /// or empty the local generator stands in. Tomorrow is always local.
    pub async fn delivery_slots(&self, day: DeliveryDay) -> Vec<DeliverySlot> {
        if day == DeliveryDay::Today {
            match self.fetch_delivery_times().await {
                Ok(slots) if !slots.is_empty() => return slots,
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "delivery time fetch failed, using local slots")
                }
            }
        }
        generate_slots(day, chrono::Local::now().time())
    }

    /// Fetch the order history of the current user
    pub async fn fetch_orders(&self) -> ClientResult<()> {
        self.require_auth()?;
        let orders: Vec<Order> = self.http().get("/users/orders/").await?;
        self.orders.replace(orders);
        Ok(())
    }

    /// Submit the cart as an order
    ///
    /// Preconditions, checked in order and before any request goes out:
    /// authenticated session, selected address, selected delivery slot.
    /// An empty cart is a no-op (`Ok(None)`), not an error. The selected
    /// address is then re-validated against a fresh fetch, since it can be
    /// deleted from another flow between selection and submission.
    ///
    /// The create call is a single atomic outcome: either a parsed order
    /// comes back or nothing happened. Only after it returns is the cart
    /// cleared, then the order recorded as current.
    pub async fn place_order(&self) -> ClientResult<Option<Order>> {
        self.require_auth()?;
        let selected = self
            .addresses
            .selected()
            .ok_or(ValidationError::AddressInvalid)?;
        let checkout = self.checkout.snapshot();
        let slot = checkout.slot.ok_or(ValidationError::DeliveryTimeMissing)?;
        let cart = self.cart.snapshot();
        if cart.is_empty() {
            return Ok(None);
        }

        let addresses = self.fetch_addresses().await?;
        if !addresses.iter().any(|a| a.id == selected.id) {
            return Err(ValidationError::AddressInvalid.into());
        }

        let request = assemble_order(&cart, &selected, &slot, checkout.payment);
        let order: Order = self.http().post("/orders/", &request).await?;

        self.cart.clear();
        self.orders.set_current(order.clone());
        tracing::debug!(order_id = order.id, "order placed");

        Ok(Some(order))
    }
}
