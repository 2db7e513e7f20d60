//! Address book
//!
//! Fetched delivery addresses plus the checkout selection. The first
//! fetched address is auto-selected when nothing is selected yet; a stale
//! selection is caught by the pre-submission re-validation in
//! [`crate::SliceClient::place_order`].

use shared::Address;
use tokio::sync::watch;

/// Address state
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    pub addresses: Vec<Address>,
    pub selected: Option<Address>,
}

/// Single-writer address container
#[derive(Debug)]
pub struct AddressStore {
    state: watch::Sender<AddressBook>,
}

impl AddressStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AddressBook::default());
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<AddressBook> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AddressBook {
        self.state.borrow().clone()
    }

    pub fn selected(&self) -> Option<Address> {
        self.state.borrow().selected.clone()
    }

    /// Select the address used at checkout
    pub fn select(&self, address: Address) {
        self.state.send_modify(|book| book.selected = Some(address));
    }

    pub(crate) fn replace(&self, addresses: Vec<Address>) {
        self.state.send_modify(|book| {
            if book.selected.is_none() {
                book.selected = addresses.first().cloned();
            }
            book.addresses = addresses;
        });
    }

    pub(crate) fn remove(&self, address_id: i64) {
        self.state
            .send_modify(|book| book.addresses.retain(|a| a.id != address_id));
    }
}

impl Default for AddressStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(id: i64) -> Address {
        Address {
            id,
            city: "Moscow".into(),
            street: "Arbat".into(),
            house: format!("{id}"),
            apartment: "1".into(),
            user_id: 1,
        }
    }

    #[test]
    fn first_fetch_auto_selects() {
        let store = AddressStore::new();
        store.replace(vec![address(7), address(8)]);
        assert_eq!(store.selected().unwrap().id, 7);
    }

    #[test]
    fn refetch_keeps_explicit_selection() {
        let store = AddressStore::new();
        store.replace(vec![address(7), address(8)]);
        store.select(address(8));

        store.replace(vec![address(7), address(8), address(9)]);
        assert_eq!(store.selected().unwrap().id, 8);
    }

    #[test]
    fn remove_drops_from_list_only() {
        let store = AddressStore::new();
        store.replace(vec![address(7)]);

        store.remove(7);

        let book = store.snapshot();
        assert!(book.addresses.is_empty());
        // Stale selection is caught at submission time, not here.
        assert!(book.selected.is_some());
    }
}
