//! Address API

use super::SliceClient;
use crate::error::ClientResult;
use shared::request::AddressCreate;
use shared::Address;

impl SliceClient {
    /// Fetch the address list, replacing the held list wholesale
    ///
    /// The first address is auto-selected when nothing is selected yet.
    /// Returns the fresh list so callers can validate against it.
    pub async fn fetch_addresses(&self) -> ClientResult<Vec<Address>> {
        self.require_auth()?;
        let addresses: Vec<Address> = self.http().get("/users/address/").await?;
        self.addresses.replace(addresses.clone());
        Ok(addresses)
    }

    /// Create a new address, then refresh the list so the server-assigned
    /// id lands in the store
    pub async fn add_address(&self, address: AddressCreate) -> ClientResult<()> {
        self.require_auth()?;
        self.http().post_unit_with("/users/address/", &address).await?;

        self.fetch_addresses().await?;
        Ok(())
    }

    /// Delete an address and drop it from the held list
    pub async fn delete_address(&self, address_id: i64) -> ClientResult<()> {
        self.require_auth()?;
        self.http()
            .delete_unit(&format!("/users/address/{address_id}"))
            .await?;

        self.addresses.remove(address_id);
        Ok(())
    }
}
