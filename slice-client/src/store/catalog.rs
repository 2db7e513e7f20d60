//! Catalog holder
//!
//! Fetched pizzas, ingredients and favorites. Every fetch replaces its list
//! wholesale (last-fetch-wins); there is no merge with prior state.

use shared::{Ingredient, Pizza};
use tokio::sync::watch;

/// Catalog state
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub pizzas: Vec<Pizza>,
    pub ingredients: Vec<Ingredient>,
    pub favorites: Vec<Pizza>,
}

/// Single-writer catalog container
#[derive(Debug)]
pub struct CatalogStore {
    state: watch::Sender<Catalog>,
}

impl CatalogStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(Catalog::default());
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<Catalog> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Catalog {
        self.state.borrow().clone()
    }

    pub(crate) fn replace_pizzas(&self, pizzas: Vec<Pizza>) {
        self.state.send_modify(|catalog| catalog.pizzas = pizzas);
    }

    pub(crate) fn replace_ingredients(&self, ingredients: Vec<Ingredient>) {
        self.state
            .send_modify(|catalog| catalog.ingredients = ingredients);
    }

    pub(crate) fn replace_favorites(&self, favorites: Vec<Pizza>) {
        self.state
            .send_modify(|catalog| catalog.favorites = favorites);
    }

    /// Surface a just-favorited pizza at the head of the main list
    pub fn move_to_front(&self, pizza: Pizza) {
        self.state.send_modify(|catalog| {
            catalog.pizzas.retain(|p| p.id != pizza.id);
            catalog.pizzas.insert(0, pizza);
        });
    }

    /// Return an unfavorited pizza to the tail of the main list
    pub fn restore_to_catalog(&self, pizza: Pizza) {
        self.state.send_modify(|catalog| {
            catalog.favorites.retain(|p| p.id != pizza.id);
            catalog.pizzas.push(pizza);
        });
    }

    pub(crate) fn remove_favorite(&self, pizza_id: i64) {
        self.state
            .send_modify(|catalog| catalog.favorites.retain(|p| p.id != pizza_id));
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
