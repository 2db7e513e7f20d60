//! Cart engine
//!
//! Authoritative in-memory cart. Enforces the merge invariant: no two lines
//! share the same `(pizza, ingredient set)` — adding a duplicate selection
//! bumps the existing line's quantity instead. Totals are always recomputed
//! from the current lines, never cached.

use rust_decimal::Decimal;
use shared::{Ingredient, Pizza};
use tokio::sync::watch;
use uuid::Uuid;

/// One distinct pizza + ingredient-set + quantity entry
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: Uuid,
    pub pizza: Pizza,
    /// Full ingredient selection for this line. Insertion order is kept for
    /// display but is irrelevant for identity: two selections with the same
    /// ids are the same line.
    pub ingredients: Vec<Ingredient>,
    pub quantity: u32,
}

impl CartLine {
    fn new(pizza: Pizza, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: Uuid::new_v4(),
            pizza,
            ingredients,
            quantity: 1,
        }
    }

    fn ingredient_key(&self) -> Vec<i64> {
        sorted_ids(&self.ingredients)
    }

    /// Selected ingredients that are not part of the base recipe
    pub fn extra_ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| !self.pizza.has_base_ingredient(i.id))
    }

    /// Base price plus the price of every extra ingredient
    pub fn unit_price(&self) -> Decimal {
        self.pizza.price + self.extra_ingredients().map(|i| i.price).sum::<Decimal>()
    }

    /// Unit price times quantity
    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }
}

fn sorted_ids(ingredients: &[Ingredient]) -> Vec<i64> {
    let mut ids: Vec<i64> = ingredients.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    ids
}

/// Cart state: lines in insertion order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line totals, recomputed on every call
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of all line quantities
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    fn add(&mut self, pizza: Pizza, ingredients: Vec<Ingredient>) {
        let key = sorted_ids(&ingredients);
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.pizza.id == pizza.id && l.ingredient_key() == key)
        {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(pizza, ingredients));
        }
    }

    fn remove(&mut self, line_id: Uuid) {
        self.lines.retain(|l| l.id != line_id);
    }

    fn set_quantity(&mut self, line_id: Uuid, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) {
            // Quantity floor is 1: a line only disappears via remove/clear.
            line.quantity = quantity.max(1);
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Single-writer cart container
///
/// All mutations run inside `send_modify`: applied atomically, visible to
/// subscribers before the call returns.
#[derive(Debug)]
pub struct CartStore {
    state: watch::Sender<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(Cart::default());
        Self { state }
    }

    /// Subscribe to cart changes
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Add a selection to the cart, merging into an existing line when the
    /// same pizza with the same ingredient set is already present
    pub fn add(&self, pizza: Pizza, ingredients: Vec<Ingredient>) {
        self.state.send_modify(|cart| cart.add(pizza, ingredients));
    }

    /// Remove a line. No-op when the id is not present.
    pub fn remove(&self, line_id: Uuid) {
        self.state.send_modify(|cart| cart.remove(line_id));
    }

    /// Set a line's quantity; values below 1 clamp to 1
    pub fn set_quantity(&self, line_id: Uuid, quantity: u32) {
        self.state
            .send_modify(|cart| cart.set_quantity(line_id, quantity));
    }

    /// Empty the cart in one step (after a successful order)
    pub fn clear(&self) {
        self.state.send_modify(Cart::clear);
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    pub fn total_price(&self) -> Decimal {
        self.state.borrow().total_price()
    }

    pub fn total_items(&self) -> u32 {
        self.state.borrow().total_items()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
