//! Catalog and favorites API

use super::SliceClient;
use crate::error::ClientResult;
use shared::{Ingredient, Pizza};

impl SliceClient {
    /// Fetch the pizza catalog, replacing the held list wholesale
    pub async fn fetch_pizzas(&self) -> ClientResult<()> {
        let pizzas: Vec<Pizza> = self.http().get("/pizzas").await?;
        tracing::debug!(count = pizzas.len(), "pizzas fetched");
        self.catalog.replace_pizzas(pizzas);
        Ok(())
    }

    /// Fetch all ingredients, replacing the held list wholesale
    pub async fn fetch_ingredients(&self) -> ClientResult<()> {
        let ingredients: Vec<Ingredient> = self.http().get("/ingredients").await?;
        self.catalog.replace_ingredients(ingredients);
        Ok(())
    }

    /// Fetch the favorite pizzas of the current user
    pub async fn fetch_favorites(&self) -> ClientResult<()> {
        self.require_auth()?;
        let favorites: Vec<Pizza> = self.http().get("/users/favorite-pizzas/").await?;
        self.catalog.replace_favorites(favorites);
        Ok(())
    }

    /// Mark a pizza as favorite
    ///
    /// The follow-up list refresh is best-effort: the mutation already
    /// succeeded, so a failed refresh only logs.
    pub async fn add_favorite(&self, pizza_id: i64) -> ClientResult<()> {
        self.require_auth()?;
        self.http()
            .post_unit(&format!("/users/favorite-pizzas/{pizza_id}"))
            .await?;

        if let Err(err) = self.fetch_favorites().await {
            tracing::warn!(error = %err, pizza_id, "favorites refresh failed");
        }
        Ok(())
    }

    /// Unmark a favorite pizza
    pub async fn remove_favorite(&self, pizza_id: i64) -> ClientResult<()> {
        self.require_auth()?;
        self.http()
            .delete_unit(&format!("/users/favorite-pizzas/{pizza_id}"))
            .await?;

        self.catalog.remove_favorite(pizza_id);
        Ok(())
    }
}
