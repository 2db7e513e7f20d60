//! Checkout selections and order assembly
//!
//! Holds the delivery-slot and payment-method choices, and turns the cart
//! plus those choices into the order-creation payload.

use crate::store::cart::Cart;
use shared::request::{CreateOrderRequest, OrderIngredientRequest, OrderPizzaRequest};
use shared::{Address, DeliverySlot, PaymentMethod};
use tokio::sync::watch;

/// Checkout state
#[derive(Debug, Clone, Default)]
pub struct CheckoutState {
    pub slot: Option<DeliverySlot>,
    pub payment: PaymentMethod,
}

/// Single-writer checkout container
#[derive(Debug)]
pub struct CheckoutStore {
    state: watch::Sender<CheckoutState>,
}

impl CheckoutStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(CheckoutState::default());
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<CheckoutState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CheckoutState {
        self.state.borrow().clone()
    }

    pub fn select_slot(&self, slot: DeliverySlot) {
        self.state.send_modify(|checkout| checkout.slot = Some(slot));
    }

    pub fn set_payment(&self, payment: PaymentMethod) {
        self.state.send_modify(|checkout| checkout.payment = payment);
    }
}

impl Default for CheckoutStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the order-creation payload
///
/// One entry per cart line; every selected ingredient goes out as an
/// addition with count 1. `delivery_time` is the slot start. Line quantity
/// is not part of the wire shape.
pub fn assemble_order(
    cart: &Cart,
    address: &Address,
    slot: &DeliverySlot,
    payment: PaymentMethod,
) -> CreateOrderRequest {
    CreateOrderRequest {
        address_id: address.id,
        pizzas: cart
            .lines()
            .iter()
            .map(|line| OrderPizzaRequest {
                pizza_id: line.pizza.id,
                ingredients: line
                    .ingredients
                    .iter()
                    .map(|ingredient| OrderIngredientRequest {
                        ingredient_id: ingredient.id,
                        is_added: true,
                        count: 1,
                    })
                    .collect(),
            })
            .collect(),
        delivery_time: slot.start().to_string(),
        payment_method: payment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::cart::CartStore;
    use rust_decimal::Decimal;
    use shared::{DeliveryDay, Ingredient, Pizza};

    fn scenario_cart() -> Cart {
        let store = CartStore::new();
        let pizza = Pizza {
            id: 1,
            name: "Margherita".into(),
            price: Decimal::from(500),
            description: String::new(),
            photo: String::new(),
            ingredients: None,
        };
        let ingredient = Ingredient {
            id: 10,
            name: "Cheese".into(),
            price: Decimal::from(50),
            photo: None,
        };
        store.add(pizza.clone(), vec![ingredient.clone()]);
        store.add(pizza, vec![ingredient]);
        store.snapshot()
    }

    fn scenario_address() -> Address {
        Address {
            id: 7,
            city: "Moscow".into(),
            street: "Arbat".into(),
            house: "1".into(),
            apartment: "2".into(),
            user_id: 1,
        }
    }

    #[test]
    fn assembles_expected_wire_shape() {
        let cart = scenario_cart();
        assert_eq!(cart.lines()[0].quantity, 2);

        let slot = DeliverySlot::new("18:00-18:30", DeliveryDay::Today);
        let request = assemble_order(&cart, &scenario_address(), &slot, PaymentMethod::Card);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address_id": 7,
                "pizzas": [
                    {
                        "pizza_id": 1,
                        "ingredients": [
                            { "ingredient_id": 10, "is_added": true, "count": 1 }
                        ]
                    }
                ],
                "delivery_time": "18:00",
                "payment_method": "card"
            })
        );
    }

    #[test]
    fn one_entry_per_line_not_per_unit() {
        let cart = scenario_cart();
        let slot = DeliverySlot::new("18:00-18:30", DeliveryDay::Today);

        let request = assemble_order(&cart, &scenario_address(), &slot, PaymentMethod::Cash);

        // Quantity 2 still produces a single pizza entry on the wire.
        assert_eq!(request.pizzas.len(), 1);
        assert_eq!(request.payment_method, PaymentMethod::Cash);
    }

    #[test]
    fn slot_selection_replaces_previous() {
        let store = CheckoutStore::new();
        store.select_slot(DeliverySlot::new("18:00-18:30", DeliveryDay::Today));
        store.select_slot(DeliverySlot::new("19:00-19:30", DeliveryDay::Today));

        assert_eq!(
            store.snapshot().slot.unwrap().time_range,
            "19:00-19:30"
        );
    }
}
