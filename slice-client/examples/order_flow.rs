//! Browse the catalog, fill a cart and place an order against a running
//! backend.
//!
//! ```bash
//! cargo run --example order_flow -- http://localhost:8000
//! ```

use slice_client::{ClientConfig, DeliveryDay, PaymentMethod};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8000".to_string());

    let client = ClientConfig::new(base_url).build_client();

    client.login("mario@example.com", "secret").await?;
    tracing::info!("logged in");

    client.fetch_pizzas().await?;
    client.fetch_ingredients().await?;
    let catalog = client.catalog.snapshot();
    tracing::info!(pizzas = catalog.pizzas.len(), "catalog loaded");

    let pizza = catalog
        .pizzas
        .first()
        .ok_or_else(|| anyhow::anyhow!("catalog is empty"))?
        .clone();
    let extra = catalog.ingredients.first().cloned();

    client.cart.add(pizza.clone(), extra.into_iter().collect());
    client.cart.add(pizza, Vec::new());
    tracing::info!(
        items = client.cart.total_items(),
        total = %client.cart.total_price(),
        "cart filled"
    );

    client.fetch_addresses().await?;
    let slots = client.delivery_slots(DeliveryDay::Today).await;
    let slot = slots
        .first()
        .ok_or_else(|| anyhow::anyhow!("no delivery slots left today"))?
        .clone();
    client.checkout.select_slot(slot);
    client.checkout.set_payment(PaymentMethod::Card);

    match client.place_order().await? {
        Some(order) => tracing::info!(order_id = order.id, status = %order.status, "order placed"),
        None => tracing::info!("cart was empty, nothing to order"),
    }

    Ok(())
}
